use anyhow::{anyhow, bail, Result};
use uuid::Uuid;

/// Resolves a full or prefixed UUID against a candidate list.
///
/// Tables here hold tens of rows, so candidates are matched in memory;
/// an ambiguous prefix lists what it could mean instead of guessing.
pub fn resolve_id<'a, T>(
    input: &str,
    candidates: impl IntoIterator<Item = (&'a Uuid, T)>,
) -> Result<Uuid>
where
    T: AsRef<str>,
{
    if let Ok(id) = input.parse::<Uuid>() {
        return Ok(id);
    }

    let needle = input.to_lowercase();
    if needle.is_empty() {
        bail!("An ID is required");
    }

    let matches: Vec<(Uuid, String)> = candidates
        .into_iter()
        .filter(|(id, _)| id.to_string().starts_with(&needle))
        .map(|(id, name)| (*id, name.as_ref().to_string()))
        .collect();

    match matches.as_slice() {
        [] => Err(anyhow!("No entry matches ID '{}'", input)),
        [(id, _)] => Ok(*id),
        many => {
            let mut message = format!("Ambiguous ID '{}'. Did you mean one of these?", input);
            for (id, name) in many {
                message.push_str(&format!("\n  {} ({})", &id.to_string()[..8], name));
            }
            Err(anyhow!(message))
        }
    }
}

/// Short display form of an ID.
pub fn short_id(id: &Uuid) -> String {
    id.to_string()[..8].to_string()
}
