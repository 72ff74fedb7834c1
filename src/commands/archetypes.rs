use crate::archetype::Archetype;
use anyhow::Result;
use std::io::Write;

/// Print every archetype with its naming tags and description.
pub fn list_archetypes() -> Result<()> {
    let stdout = std::io::stdout();
    write_archetypes(&mut stdout.lock())
}

pub fn write_archetypes<W: Write>(out: &mut W) -> Result<()> {
    for archetype in Archetype::ALL {
        writeln!(out, "{}", archetype.name())?;
        let tags = archetype.rule().naming;
        if !tags.is_empty() {
            writeln!(out, "  names: {}", tags.join(", "))?;
        }
        writeln!(out, "  {}", archetype.description())?;
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_all_archetypes() {
        let mut buffer = Vec::new();
        write_archetypes(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        for archetype in Archetype::ALL {
            assert!(text.contains(archetype.name()));
        }
        assert!(text.contains("names: validate_, _validator"));
    }
}
