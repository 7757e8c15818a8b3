//! Step 4: enumerant values, classes and the constant order.

use crate::error::ResolveError;
use crate::naming::constant_name;
use crate::tables::special_number_ordinal;
use fxhash::FxHashSet;
use glzig_domain::features::{ConstantClass, ResolvedConstant};
use glzig_domain::selection::Selection;
use glzig_registry::{EnumGroup, Registry};
use num_bigint::{BigInt, Sign};
use num_traits::Num;
use std::cmp::Ordering;

const SPECIAL_NUMBERS_GROUP: &str = "SpecialNumbers";

/// A constant together with the fields it is sorted by.
#[derive(Debug, Clone)]
struct Candidate {
    class: ConstantClass,
    ordinal: usize,
    group: Option<String>,
    value: BigInt,
    constant: ResolvedConstant,
}

impl Candidate {
    fn cmp_key(&self, other: &Self) -> Ordering {
        self.class.cmp(&other.class).then_with(|| match self.class {
            ConstantClass::SpecialNumber => self.ordinal.cmp(&other.ordinal),
            ConstantClass::Enum => self
                .value
                .cmp(&other.value)
                .then_with(|| self.constant.key.cmp(&other.constant.key)),
            ConstantClass::Bitmask | ConstantClass::Other => self
                .group
                .cmp(&other.group)
                .then_with(|| self.value.cmp(&other.value))
                .then_with(|| self.constant.key.cmp(&other.constant.key)),
        })
    }
}

/// Parses an enumerant `value`: optional sign, then `0x` hex or decimal digits.
pub fn parse_value(raw: &str) -> Result<BigInt, ResolveError> {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let parsed = match digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        Some(hex) => BigInt::from_str_radix(hex, 16),
        None => BigInt::from_str_radix(digits, 10),
    };
    let magnitude = parsed.map_err(|err| ResolveError::InvalidValue {
        message: format!("'{raw}': {err}").into(),
        context: None,
    })?;
    if magnitude.sign() == Sign::Minus {
        return Err(ResolveError::InvalidValue {
            message: format!("'{raw}': misplaced sign").into(),
            context: None,
        });
    }
    Ok(if negative { -magnitude } else { magnitude })
}

/// `-1` -> `-0x1`, `34880` -> `0x8840`.
#[must_use]
pub fn format_hex(value: &BigInt) -> String {
    let sign = if value.sign() == Sign::Minus { "-" } else { "" };
    format!("{sign}0x{}", value.magnitude().to_str_radix(16).to_uppercase())
}

fn classify(group: &EnumGroup, key: &str) -> Option<(ConstantClass, usize)> {
    if group.group.as_deref() == Some(SPECIAL_NUMBERS_GROUP) {
        return special_number_ordinal(key).map(|ordinal| (ConstantClass::SpecialNumber, ordinal));
    }
    let class = if group.is_bitmask() {
        ConstantClass::Bitmask
    } else if group.start.is_some() {
        ConstantClass::Enum
    } else {
        ConstantClass::Other
    };
    Some((class, 0))
}

/// Resolves the enumerants named in `required`, in emission order.
///
/// An enumerant listed twice in the registry resolves to its first applicable occurrence.
pub(crate) fn resolve_constants(
    registry: &Registry,
    required: &FxHashSet<String>,
    selection: &Selection,
) -> Result<Vec<ResolvedConstant>, ResolveError> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut candidates = Vec::new();

    for group in registry.enum_groups() {
        for entry in &group.entries {
            if !required.contains(&entry.name) || seen.contains(entry.name.as_str()) {
                continue;
            }
            if entry.api.as_deref().is_some_and(|api| api != selection.api) {
                continue;
            }
            let Some((class, ordinal)) = classify(group, &entry.name) else { continue };

            let value = parse_value(&entry.value).map_err(|err| match err {
                ResolveError::InvalidValue { message, .. } => ResolveError::InvalidValue {
                    message,
                    context: Some(format!("Enumerant '{}'", entry.name).into()),
                },
                other => other,
            })?;
            seen.insert(&entry.name);
            candidates.push(Candidate {
                class,
                ordinal,
                group: group.group.clone(),
                constant: ResolvedConstant {
                    key: entry.name.clone(),
                    name: constant_name(&entry.name, selection.naming),
                    value: format_hex(&value),
                    class,
                },
                value,
            });
        }
    }

    candidates.sort_by(Candidate::cmp_key);
    Ok(candidates.into_iter().map(|c| c.constant).collect())
}
