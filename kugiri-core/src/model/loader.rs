//! Construction of a [`Model`] from its JSON description

use super::{Model, NgramTable, BIGRAM_SLOTS, TRIGRAM_SLOTS, UNIGRAM_SLOTS};
use crate::error::{ModelError, ModelResult};
use serde_json::{Map, Value};

const UNIGRAM_NAMES: [&str; UNIGRAM_SLOTS] = ["UW1", "UW2", "UW3", "UW4", "UW5", "UW6"];
const BIGRAM_NAMES: [&str; BIGRAM_SLOTS] = ["BW1", "BW2", "BW3"];
const TRIGRAM_NAMES: [&str; TRIGRAM_SLOTS] = ["TW1", "TW2", "TW3", "TW4"];

/// A recognized slot name, resolved to its table family and index
#[derive(Debug, Clone, Copy)]
enum Slot {
    Uni(usize),
    Bi(usize),
    Tri(usize),
}

impl Slot {
    /// Only `{U|B|T}W<digit>` names within each family's range resolve;
    /// everything else is an unrecognized top-level key and is ignored.
    fn resolve(name: &str) -> Option<Self> {
        let bytes = name.as_bytes();
        if bytes.len() != 3 || bytes[1] != b'W' {
            return None;
        }
        let index = (bytes[2] as char).to_digit(10)?.checked_sub(1)? as usize;
        match bytes[0] {
            b'U' if index < UNIGRAM_SLOTS => Some(Slot::Uni(index)),
            b'B' if index < BIGRAM_SLOTS => Some(Slot::Bi(index)),
            b'T' if index < TRIGRAM_SLOTS => Some(Slot::Tri(index)),
            _ => None,
        }
    }
}

/// Accumulates tables until all 13 slots are filled.
///
/// Dropped wholesale on any error, so no partial model escapes.
#[derive(Default)]
struct ModelBuilder {
    uni: [Option<NgramTable<1>>; UNIGRAM_SLOTS],
    bi: [Option<NgramTable<2>>; BIGRAM_SLOTS],
    tri: [Option<NgramTable<3>>; TRIGRAM_SLOTS],
}

impl ModelBuilder {
    fn fill(&mut self, slot: Slot, name: &str, entries: &Map<String, Value>) -> ModelResult<()> {
        match slot {
            Slot::Uni(i) => Self::place(&mut self.uni[i], name, entries),
            Slot::Bi(i) => Self::place(&mut self.bi[i], name, entries),
            Slot::Tri(i) => Self::place(&mut self.tri[i], name, entries),
        }
    }

    fn place<const N: usize>(
        dest: &mut Option<NgramTable<N>>,
        name: &str,
        entries: &Map<String, Value>,
    ) -> ModelResult<()> {
        if dest.is_some() {
            return Err(ModelError::DuplicateSlot { slot: name.to_string() });
        }
        *dest = Some(build_table(name, entries)?);
        Ok(())
    }

    fn finish(self) -> ModelResult<Model> {
        let uni = take_all(self.uni, &UNIGRAM_NAMES)?;
        let bi = take_all(self.bi, &BIGRAM_NAMES)?;
        let tri = take_all(self.tri, &TRIGRAM_NAMES)?;
        let total_weight = uni.iter().map(NgramTable::total).sum::<i64>()
            + bi.iter().map(NgramTable::total).sum::<i64>()
            + tri.iter().map(NgramTable::total).sum::<i64>();
        Ok(Model {
            uni,
            bi,
            tri,
            total_weight,
        })
    }
}

fn take_all<const N: usize, const SLOTS: usize>(
    slots: [Option<NgramTable<N>>; SLOTS],
    names: &'static [&'static str; SLOTS],
) -> ModelResult<[NgramTable<N>; SLOTS]> {
    let mut out: [NgramTable<N>; SLOTS] = std::array::from_fn(|_| NgramTable::default());
    for (i, slot) in slots.into_iter().enumerate() {
        out[i] = slot.ok_or(ModelError::MissingSlot { slot: names[i] })?;
    }
    Ok(out)
}

fn build_table<const N: usize>(
    slot: &str,
    entries: &Map<String, Value>,
) -> ModelResult<NgramTable<N>> {
    let mut table = NgramTable::with_capacity(entries.len());
    for (key, value) in entries {
        let weight = value
            .as_i64()
            .and_then(|w| i32::try_from(w).ok())
            .ok_or_else(|| ModelError::InvalidWeight {
                slot: slot.to_string(),
                key: key.clone(),
            })?;
        // Right-pad short keys with the zero codepoint up to arity N
        let mut padded = ['\0'; N];
        let mut chars = key.chars();
        for dest in padded.iter_mut() {
            match chars.next() {
                Some(ch) => *dest = ch,
                None => break,
            }
        }
        if chars.next().is_some() {
            return Err(ModelError::KeyTooLong {
                slot: slot.to_string(),
                key: key.clone(),
                arity: N,
            });
        }
        table.insert(padded, weight);
    }
    Ok(table)
}

pub(super) fn build(bytes: &[u8]) -> ModelResult<Model> {
    let root: Value = serde_json::from_slice(bytes)?;
    let Value::Object(root) = root else {
        return Err(ModelError::RootNotObject);
    };
    let mut builder = ModelBuilder::default();
    for (name, value) in &root {
        let Some(slot) = Slot::resolve(name) else {
            continue;
        };
        let entries = value.as_object().ok_or_else(|| ModelError::SlotNotObject {
            slot: name.clone(),
        })?;
        builder.fill(slot, name, entries)?;
    }
    builder.finish()
}
