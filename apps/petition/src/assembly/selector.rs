//! Fragment selection — decides which text blocks make up a petition, and in what order.
//!
//! Pure function of the validated case; no lookups happen here. Options were
//! already checked against their vocabularies when the `CaseInput` was built.

use crate::assembly::placeholder::Placeholder;
use crate::assembly::store::BlockKey;
use crate::models::case::{CaseInput, FreeJustice, Priority};

/// Number of slots in the petition backbone (the priority slot is optional).
pub const BACKBONE_SLOTS: usize = 11;

/// A fragment to fetch plus the substitutions that apply to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockRequest<'a> {
    pub key: BlockKey,
    pub replacements: Vec<(Placeholder, &'a str)>,
}

impl<'a> BlockRequest<'a> {
    fn new(key: BlockKey) -> Self {
        Self {
            key,
            replacements: Vec::new(),
        }
    }

    fn with(mut self, placeholder: Placeholder, value: &'a str) -> Self {
        self.replacements.push((placeholder, value));
        self
    }
}

/// Selects the fragments for a case, in document order.
///
/// Backbone:
///  1. comarca (venue)                     6. fatos (illness)
///  2. qualificacao_completa (claimant)    7. negativa_{denial}
///  3. plano_{plan}                        8. cdc
///  4. prioridade_{priority} (illness)     9. tipo_{demand} (illness)
///     (only when priority ≠ none)        10. urgencia_{urgency type} (urgency)
///  5. gratuidade_{free justice}          11. pedidos_{request}
///
/// Every other slot is always emitted, even when its text input is empty.
pub fn select(case: &CaseInput) -> Vec<BlockRequest<'_>> {
    let mut blocks = Vec::with_capacity(BACKBONE_SLOTS);

    blocks.push(
        BlockRequest::new(BlockKey::new(1, "comarca", None))
            .with(Placeholder::Venue, &case.venue),
    );
    blocks.push(
        BlockRequest::new(BlockKey::new(2, "qualificacao_completa", None))
            .with(Placeholder::Claimant, &case.claimant),
    );
    blocks.push(BlockRequest::new(BlockKey::new(
        3,
        "plano",
        Some(case.plan.as_str()),
    )));

    if case.priority != Priority::None {
        blocks.push(
            BlockRequest::new(BlockKey::new(4, "prioridade", Some(case.priority.as_str())))
                .with(Placeholder::Illness, &case.illness),
        );
    }

    blocks.push(BlockRequest::new(BlockKey::new(
        5,
        "gratuidade",
        Some(free_justice_suffix(case.free_justice)),
    )));
    blocks.push(
        BlockRequest::new(BlockKey::new(6, "fatos", None))
            .with(Placeholder::Illness, &case.illness),
    );
    blocks.push(BlockRequest::new(BlockKey::new(
        7,
        "negativa",
        Some(case.denial.as_str()),
    )));
    blocks.push(BlockRequest::new(BlockKey::new(8, "cdc", None)));
    blocks.push(
        BlockRequest::new(BlockKey::new(9, "tipo", Some(case.demand.as_str())))
            .with(Placeholder::Illness, &case.illness),
    );
    blocks.push(
        BlockRequest::new(BlockKey::new(10, "urgencia", Some(case.urgency_type.as_str())))
            .with(Placeholder::Urgency, &case.urgency),
    );
    blocks.push(BlockRequest::new(BlockKey::new(
        11,
        "pedidos",
        Some(case.request.as_str()),
    )));

    blocks
}

/// The fragment without a waiver is stored as `gratuidade_nenhuma`.
fn free_justice_suffix(free_justice: FreeJustice) -> &'static str {
    match free_justice {
        FreeJustice::None => "nenhuma",
        other => other.as_str(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
