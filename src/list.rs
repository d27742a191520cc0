//! Listing of available actions
//!
//! Each line is ` <name padded> | <description>`. In [`ListMode::Null`] the line
//! is followed by a NUL and the bare name, so a fuzzy selector can display the
//! whole line while handing back only the name.

use std::io::{self, Write};

use crate::actions::action::Action;
use crate::actions::catalog::Catalog;
use crate::actions::pack::Pack;

pub const NO_DESCRIPTION: &str = "<NO DESCRIPTION>";

/// How each listing line is terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListMode {
    #[default]
    Plain,
    Null,
}

fn name_width<'a>(actions: impl Iterator<Item = &'a Action>) -> usize {
    actions.map(|a| a.name.chars().count()).max().unwrap_or(0)
}

fn write_action(out: &mut impl Write, action: &Action, width: usize, mode: ListMode) -> io::Result<()> {
    let desc = action.desc.as_deref().unwrap_or(NO_DESCRIPTION);
    write!(out, " {:<width$} | {desc}", action.name)?;
    match mode {
        ListMode::Plain => writeln!(out),
        ListMode::Null => writeln!(out, "\0{}", action.name),
    }
}

/// Write every valid action of the catalog, first occurrence of each name only.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn render_catalog(catalog: &Catalog, mode: ListMode, out: &mut impl Write) -> io::Result<()> {
    let width = name_width(catalog.packs.iter().flat_map(|pack| pack.valid_actions()));
    for action in catalog.unique_actions() {
        write_action(out, action, width, mode)?;
    }
    Ok(())
}

/// Write every valid action of a single pack, in declaration order.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn render_pack(pack: &Pack, mode: ListMode, out: &mut impl Write) -> io::Result<()> {
    let width = name_width(pack.valid_actions());
    for action in pack.valid_actions() {
        write_action(out, action, width, mode)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_action(name: &str, desc: Option<&str>, script: &str) -> Action {
        Action {
            name: name.to_string(),
            desc: desc.map(str::to_string),
            script: script.to_string(),
            ..Default::default()
        }
    }

    fn make_pack(actions: Vec<Action>) -> Pack {
        Pack {
            actions,
            shell: "sh".to_string(),
            ..Default::default()
        }
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_render_catalog_plain() {
        let catalog = Catalog {
            packs: vec![
                make_pack(vec![
                    make_action("build", Some("compile the project"), "make all"),
                    make_action("test", None, "make test"),
                ]),
                make_pack(vec![
                    make_action("build", Some("shadowed"), "cargo build"),
                    make_action("fmt", Some("format sources"), "cargo fmt"),
                ]),
            ],
        };
        let output = render(|out| render_catalog(&catalog, ListMode::Plain, out));
        insta::assert_debug_snapshot!(output.lines().collect::<Vec<_>>(), @r#"
        [
            " build | compile the project",
            " test  | <NO DESCRIPTION>",
            " fmt   | format sources",
        ]
        "#);
    }

    #[test]
    fn test_render_catalog_null() {
        let catalog = Catalog {
            packs: vec![make_pack(vec![
                make_action("a", Some("first"), "true"),
                make_action("long", None, "true"),
            ])],
        };
        let output = render(|out| render_catalog(&catalog, ListMode::Null, out));
        assert_eq!(output, " a    | first\0a\n long | <NO DESCRIPTION>\0long\n");
    }

    #[test]
    fn test_invalid_actions_are_not_listed_or_measured() {
        let pack = make_pack(vec![
            make_action("x", Some("ok"), "true"),
            make_action("much-longer-name", Some("no script"), ""),
            make_action("", Some("no name"), "true"),
        ]);
        let output = render(|out| render_pack(&pack, ListMode::Plain, out));
        assert_eq!(output, " x | ok\n");
    }

    #[test]
    fn test_render_pack_keeps_duplicates() {
        let pack = make_pack(vec![
            make_action("x", Some("one"), "true"),
            make_action("x", Some("two"), "true"),
        ]);
        let output = render(|out| render_pack(&pack, ListMode::Plain, out));
        assert_eq!(output, " x | one\n x | two\n");
    }

    #[test]
    fn test_render_empty_catalog() {
        let output = render(|out| render_catalog(&Catalog::default(), ListMode::Plain, out));
        assert!(output.is_empty());
    }
}
