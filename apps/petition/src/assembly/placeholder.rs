//! Placeholder substitution — literal replacement of bracketed tokens in a fragment.

/// A case-specific value that fragments reference by a bracketed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Venue,
    Claimant,
    Illness,
    Urgency,
}

impl Placeholder {
    /// The literal token as written in the fragment files.
    pub fn token(self) -> &'static str {
        match self {
            Placeholder::Venue => "[INSERIR COMARCA]",
            Placeholder::Claimant => "[INSERIR QUALIFICAÇÃO INFORMADA]",
            Placeholder::Illness => "[DESCREVER DOENÇA]",
            Placeholder::Urgency => "[DESCRIÇÃO URGÊNCIA]",
        }
    }
}

/// Replaces every occurrence of each listed token with its value.
///
/// Single left-to-right pass: replacement values are never rescanned, so a value
/// that happens to contain a token is inserted verbatim and the result does not
/// depend on the order of `replacements`. Tokens not listed are left untouched.
pub fn substitute(fragment: &str, replacements: &[(Placeholder, &str)]) -> String {
    let mut output = String::with_capacity(fragment.len());
    let mut rest = fragment;

    while let Some((at, token, value)) = next_token(rest, replacements) {
        output.push_str(&rest[..at]);
        output.push_str(value);
        rest = &rest[at + token.len()..];
    }

    output.push_str(rest);
    output
}

/// Earliest listed token in `text`, with its byte offset and replacement.
fn next_token<'r>(
    text: &str,
    replacements: &[(Placeholder, &'r str)],
) -> Option<(usize, &'static str, &'r str)> {
    replacements
        .iter()
        .filter_map(|&(placeholder, value)| {
            let token = placeholder.token();
            text.find(token).map(|at| (at, token, value))
        })
        .min_by_key(|&(at, _, _)| at)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_every_occurrence() {
        let fragment = "Portador de [DESCREVER DOENÇA]; a [DESCREVER DOENÇA] progride.";
        let result = substitute(fragment, &[(Placeholder::Illness, "diabetes")]);
        assert_eq!(result, "Portador de diabetes; a diabetes progride.");
        assert!(!result.contains(Placeholder::Illness.token()));
    }

    #[test]
    fn test_unlisted_token_left_verbatim() {
        let fragment = "Comarca de [INSERIR COMARCA], doença [DESCREVER DOENÇA].";
        let result = substitute(fragment, &[(Placeholder::Venue, "Campinas")]);
        assert_eq!(result, "Comarca de Campinas, doença [DESCREVER DOENÇA].");
    }

    #[test]
    fn test_no_tokens_is_identity() {
        let fragment = "Texto sem marcadores.";
        assert_eq!(substitute(fragment, &[(Placeholder::Venue, "x")]), fragment);
        assert_eq!(substitute(fragment, &[]), fragment);
    }

    #[test]
    fn test_value_containing_token_is_not_rescanned() {
        let fragment = "[INSERIR COMARCA] / [DESCREVER DOENÇA]";
        let forward = substitute(
            fragment,
            &[
                (Placeholder::Venue, "[DESCREVER DOENÇA]"),
                (Placeholder::Illness, "asma"),
            ],
        );
        let reversed = substitute(
            fragment,
            &[
                (Placeholder::Illness, "asma"),
                (Placeholder::Venue, "[DESCREVER DOENÇA]"),
            ],
        );
        assert_eq!(forward, "[DESCREVER DOENÇA] / asma");
        assert_eq!(forward, reversed, "substitution must be order-independent");
    }

    #[test]
    fn test_multibyte_tokens_and_values() {
        let fragment = "URGÊNCIA: [DESCRIÇÃO URGÊNCIA]!";
        let result = substitute(fragment, &[(Placeholder::Urgency, "risco à saúde")]);
        assert_eq!(result, "URGÊNCIA: risco à saúde!");
    }
}
