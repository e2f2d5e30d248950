// Author: Dustin Pilgrim
// License: MIT

use indexmap::IndexMap;

use super::*;
use crate::ast::Block;
use crate::lexer::LineShape;

/// A block whose closing brace hasn't been seen yet.
struct OpenBlock {
    name: String,
    scope: Scope,
    blocks: IndexMap<String, Block>,
    start: usize,
}

impl OpenBlock {
    fn new(name: &str, start: usize) -> Self {
        Self {
            name: name.to_string(),
            scope: Scope::new(),
            blocks: IndexMap::new(),
            start,
        }
    }

    fn finish(self) -> Block {
        Block {
            name: self.name,
            attributes: self.scope.into_attributes(),
            blocks: self.blocks,
        }
    }
}

/// Walk the lines once with a stack of open blocks.
///
/// Attribute lines land in the innermost open block, or in the document when
/// no block is open, so nested blocks never leak attributes into their
/// parents and vice versa.
pub(super) fn parse_document(parser: &mut Parser) -> Result<Document, NeclError> {
    let mut root = Scope::new();
    let mut root_blocks: IndexMap<String, Block> = IndexMap::new();
    let mut stack: Vec<OpenBlock> = Vec::new();

    while let Some(text) = parser.bump() {
        let line = parser.line();

        match lexer::line_shape(&text) {
            LineShape::Blank => {}
            LineShape::Open { name, closed, body } => {
                if name.is_empty() {
                    return Err(NeclError::EmptyBlockName {
                        line,
                        hint: Some("Open blocks with: name {".into()),
                    });
                }
                if !body.is_empty() {
                    return Err(NeclError::InlineBlockContent {
                        name: name.to_string(),
                        content: body.to_string(),
                        line,
                        hint: Some("Put each attribute of the block on its own line".into()),
                    });
                }
                stack.push(OpenBlock::new(name, line));
                if closed {
                    close_block(&mut stack, &mut root_blocks, line)?;
                }
            }
            LineShape::Close => close_block(&mut stack, &mut root_blocks, line)?,
            LineShape::Content => {
                let scope = match stack.last_mut() {
                    Some(open) => &mut open.scope,
                    None => &mut root,
                };
                let attribute = value::parse_attribute(parser, &text, scope)
                    .map_err(|e| e.at_line(line))?;
                if let Some(attribute) = attribute {
                    scope.insert(attribute);
                }
            }
        }
    }

    if let Some(open) = stack.last() {
        return Err(NeclError::UnbalancedBraces {
            message: format!("block '{}' is never closed", open.name),
            line: open.start,
            hint: Some("Add a closing '}'".into()),
        });
    }

    Ok(Document {
        attributes: root.into_attributes(),
        blocks: root_blocks,
    })
}

fn close_block(
    stack: &mut Vec<OpenBlock>,
    root_blocks: &mut IndexMap<String, Block>,
    line: usize,
) -> Result<(), NeclError> {
    let open = stack.pop().ok_or_else(|| NeclError::UnbalancedBraces {
        message: "'}' without a matching '{'".into(),
        line,
        hint: None,
    })?;

    let block = open.finish();
    let siblings = match stack.last_mut() {
        Some(parent) => &mut parent.blocks,
        None => root_blocks,
    };
    siblings.insert(block.name.clone(), block);
    Ok(())
}
