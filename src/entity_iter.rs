use itertools::{put_back, PutBack};
use tracing::trace;

use crate::code_pair_put_back::CodePairPutBack;
use crate::entities::*;
use crate::section::is_section_end;
use crate::{CodePair, DrawingItem, DxfError, DxfResult, Entity, ParseOptions, RawRecord};

/// Reads the body of an ENTITIES or BLOCKS section up to its `0/ENDSEC`, which is left in `iter`,
/// and nests vertices, attributes and block contents under their owners.
pub(crate) fn read_entity_items<I>(
    iter: &mut CodePairPutBack<I>,
    options: &ParseOptions,
) -> DxfResult<Vec<DrawingItem>>
where
    I: Iterator<Item = DxfResult<CodePair>>,
{
    let flat = read_flat_items(iter, options)?;
    let mut items = vec![];
    let mut flat = put_back(flat);
    collect_items(&mut flat, &mut items, false)?;
    Ok(items)
}

fn read_flat_items<I>(
    iter: &mut CodePairPutBack<I>,
    options: &ParseOptions,
) -> DxfResult<Vec<DrawingItem>>
where
    I: Iterator<Item = DxfResult<CodePair>>,
{
    let mut items = vec![];
    loop {
        let pair = match iter.next() {
            Some(Ok(pair)) => pair,
            Some(Err(e)) => return Err(e),
            None => break,
        };
        if is_section_end(&pair) {
            iter.put_back(Ok(pair));
            break;
        }

        let specific = if pair.code == 0 {
            pair.keyword().and_then(EntityType::from_type_string)
        } else {
            // stray pairs before any 0-code marker
            None
        };
        let item = match specific {
            Some(specific) => DrawingItem::Entity(Entity::read(
                specific,
                &pair,
                iter,
                options.duplicate_scalars,
            )?),
            None => DrawingItem::Raw(RawRecord::read(pair, iter)?),
        };
        items.push(item);
    }

    Ok(items)
}

/// Moves items into `items`, nesting as it goes.  Inside a block, returns the ENDBLK record that
/// closed it, or `None` if the items ran out first.
fn collect_items<I>(
    iter: &mut PutBack<I>,
    items: &mut Vec<DrawingItem>,
    in_block: bool,
) -> DxfResult<Option<RawRecord>>
where
    I: Iterator<Item = DrawingItem>,
{
    while let Some(item) = iter.next() {
        match item {
            DrawingItem::Raw(raw) if in_block && raw.kind() == Some("ENDBLK") => {
                return Ok(Some(raw));
            }
            DrawingItem::Entity(mut entity) => {
                match entity.specific {
                    EntityType::Polyline(_) => {
                        gather_children(iter, &mut entity, "VERTEX");
                        let seqend = take_seqend(iter);
                        if let EntityType::Polyline(ref mut poly) = entity.specific {
                            poly.seqend = seqend;
                        }
                    }
                    EntityType::Insert(ref insert) => {
                        let has_attributes = insert.has_attributes;
                        let gathered = gather_children(iter, &mut entity, "ATTRIB");
                        if has_attributes || gathered > 0 {
                            let seqend = take_seqend(iter);
                            if let EntityType::Insert(ref mut insert) = entity.specific {
                                insert.seqend = seqend;
                            }
                        }
                    }
                    EntityType::Block(_) => {
                        let mut children = vec![];
                        match collect_items(iter, &mut children, true)? {
                            Some(end_block) => {
                                if let EntityType::Block(ref mut block) = entity.specific {
                                    block.end_handle = end_block.handle().map(String::from);
                                    block.end_block = Some(end_block);
                                }
                                entity.children = children;
                            }
                            None => {
                                let name = match entity.specific {
                                    EntityType::Block(ref block) => block.name.clone(),
                                    _ => String::new(),
                                };
                                return Err(DxfError::UnterminatedBlock {
                                    name,
                                    line: entity.line,
                                });
                            }
                        }
                    }
                    _ => (),
                }
                items.push(DrawingItem::Entity(entity));
            }
            other => items.push(other),
        }
    }

    Ok(None)
}

/// Moves every directly following entity of `child_kind` under `parent`.
fn gather_children<I>(iter: &mut PutBack<I>, parent: &mut Entity, child_kind: &str) -> usize
where
    I: Iterator<Item = DrawingItem>,
{
    let mut gathered = 0;
    loop {
        match iter.next() {
            Some(DrawingItem::Entity(child)) if child.kind() == child_kind => {
                parent.children.push(DrawingItem::Entity(child));
                gathered += 1;
            }
            Some(item) => {
                // stop gathering on any other item
                iter.put_back(item);
                break;
            }
            None => break,
        }
    }

    gathered
}

/// Takes the SEQEND record that closes a vertex or attribute run, if one follows.
fn take_seqend<I>(iter: &mut PutBack<I>) -> Option<RawRecord>
where
    I: Iterator<Item = DrawingItem>,
{
    match iter.next() {
        Some(DrawingItem::Raw(raw)) if raw.kind() == Some("SEQEND") => {
            trace!(line = raw.line(), "closing sequence with SEQEND");
            Some(raw)
        }
        Some(item) => {
            iter.put_back(item);
            None
        }
        None => None,
    }
}
