//! Default résumé skeleton.
//!
//! Builds the starter document a new résumé id gets before anything is
//! saved: basic info, education, two sample sections, and skills, with the
//! negative-margin decorators that tighten the printed layout. Everything
//! here goes through the public tree operations only.

use resumark_document::{
    ContentTree, Decoration, FontStyle, Margins, NodeId, NodeKind,
};

/// Value slot of a key/value pair line.
enum PairValue<'a> {
    None,
    Text(&'a str),
    Link(&'a str, &'a str),
}

/// One cell of a bold tabular header row.
enum Cell<'a> {
    Text(&'a str),
    Link(&'a str, &'a str),
}

/// Build the whole starter document.
pub fn template_tree() -> ContentTree {
    let mut tree = ContentTree::with_root(NodeKind::sequence());
    let root = tree.root();

    // set_label/insert on just-allocated ids cannot fail.
    let _ = tree.set_label(root, "Resume");
    for section in [
        basic_info(&mut tree),
        education_section(&mut tree),
        sample_section(&mut tree, "Experience"),
        sample_section(&mut tree, "Projects"),
        skills(&mut tree),
    ] {
        let _ = tree.insert(root, section, None);
    }

    let _ = tree.decorate(
        root,
        Decoration::StyledFont(FontStyle::default()),
    );
    let _ = tree.decorate(
        root,
        Decoration::BoxMargin(Margins::new("20px", "20px", "20px", "20px")),
    );
    tree
}

fn text(tree: &mut ContentTree, value: &str) -> NodeId {
    tree.alloc(NodeKind::text(value))
}

/// A `TextLine` holding a single text element.
fn text_sequence(tree: &mut ContentTree, value: &str) -> NodeId {
    let line = tree.alloc(NodeKind::text_line());
    let item = text(tree, value);
    let _ = tree.insert(line, item, None);
    line
}

fn header(tree: &mut ContentTree, value: &str, level: u32) -> NodeId {
    let header = tree.alloc(NodeKind::header(level));
    let title = text(tree, value);
    let _ = tree.insert(header, title, None);
    header
}

/// A `key: value` line with the key in bold.
fn pair(tree: &mut ContentTree, key: &str, value: PairValue<'_>) -> NodeId {
    let line = tree.alloc(NodeKind::text_line());
    let _ = tree.set_label(line, key);

    let key_text = text(tree, &format!("{key}: "));
    let key_bold = tree
        .decorate(key_text, Decoration::StyledFont(FontStyle::bold()))
        .unwrap_or(key_text);
    let _ = tree.insert(line, key_bold, None);

    match value {
        PairValue::None => {}
        PairValue::Text(value) => {
            let item = text(tree, value);
            let _ = tree.insert(line, item, None);
        }
        PairValue::Link(value, url) => {
            let item = tree.alloc(NodeKind::url(value, url));
            let _ = tree.insert(line, item, None);
        }
    }
    line
}

/// A `key: a, b, c` line; the value is an inline list.
fn key_list_pair(tree: &mut ContentTree, key: &str, items: &[&str]) -> NodeId {
    let line = pair(tree, key, PairValue::None);
    let list = tree.alloc(NodeKind::inline_list());
    for item in items {
        let element = text(tree, item);
        let _ = tree.insert(list, element, None);
    }
    let _ = tree.insert(line, list, None);
    line
}

/// A tabular row of bold cells (plain text or links).
fn bold_tabular(tree: &mut ContentTree, cells: &[Cell<'_>]) -> NodeId {
    let table = tree.alloc(NodeKind::tabular(3));
    for cell in cells {
        let element = match cell {
            Cell::Text(value) => text(tree, value),
            Cell::Link(value, url) => tree.alloc(NodeKind::url(*value, *url)),
        };
        let bold = tree
            .decorate(element, Decoration::StyledFont(FontStyle::bold()))
            .unwrap_or(element);
        let _ = tree.insert(table, bold, None);
    }
    table
}

fn basic_info(tree: &mut ContentTree) -> NodeId {
    let name = header(tree, "[Your Name]", 1);
    let _ = tree.set_label(name, "Name");

    let title = header(tree, "[Your Title]", 2);
    let title = tree
        .decorate(
            title,
            Decoration::BoxMargin(Margins::new("-20px", "0px", "0px", "10px")),
        )
        .unwrap_or(title);
    let _ = tree.set_label(title, "title");

    let info = tree.alloc(NodeKind::tabular(3));
    let _ = tree.set_label(info, "Details");
    let pairs = [
        pair(tree, "Address", PairValue::Text("[Your Address]")),
        pair(tree, "Phone", PairValue::Text("[Your Phone Number]")),
        pair(tree, "Email", PairValue::Text("[Your Email]")),
        pair(
            tree,
            "LinkedIn",
            PairValue::Link("[Your LinkedIn Profile]", "[Your LinkedIn Profile Link]"),
        ),
        pair(
            tree,
            "Github",
            PairValue::Link("[Your Github Profile]", "[Your Github Profile Link]"),
        ),
    ];
    for entry in pairs {
        let _ = tree.insert(info, entry, None);
    }
    let info = tree
        .decorate(
            info,
            Decoration::BoxMargin(Margins::new("-20px", "0px", "0px", "20px")),
        )
        .unwrap_or(info);

    let section = tree.alloc(NodeKind::sequence());
    let _ = tree.set_label(section, "Basic Info");
    for part in [name, title, info] {
        let _ = tree.insert(section, part, None);
    }
    section
}

fn education_section(tree: &mut ContentTree) -> NodeId {
    let samples = tree.alloc(NodeKind::sequence());
    let _ = tree.set_label(samples, "Education Sample(s)");
    let entry = education_sample(tree);
    let _ = tree.insert(samples, entry, None);
    let samples = tree
        .decorate(
            samples,
            Decoration::BoxMargin(Margins::new("-5px", "0px", "0px", "10px")),
        )
        .unwrap_or(samples);

    let section = section_header(tree, "Education");
    let _ = tree.insert(section, samples, None);
    section
}

fn education_sample(tree: &mut ContentTree) -> NodeId {
    let general = bold_tabular(
        tree,
        &[
            Cell::Text("[School Location]"),
            Cell::Text("[School Name]"),
            Cell::Text("[Period]"),
        ],
    );
    let _ = tree.set_label(general, "General Info");

    let details = tree.alloc(NodeKind::unordered_list());
    let _ = tree.set_label(details, "Details");
    let entries = [
        key_list_pair(tree, "Major", &["[Major 1]", "[Major 2]", "..."]),
        key_list_pair(tree, "Certificate (Minor)", &["[Minor 1]", "[Minor 2]", "..."]),
        key_list_pair(
            tree,
            "Relevant Coursework",
            &["[Course A]", "[Course B]", "[Course C]", "[Course D]", "..."],
        ),
    ];
    for entry in entries {
        let _ = tree.insert(details, entry, None);
    }
    let details = tree
        .decorate(
            details,
            Decoration::BoxMargin(Margins::new("-15px", "0px", "-10px", "0px")),
        )
        .unwrap_or(details);

    let sample = tree.alloc(NodeKind::sequence());
    let _ = tree.set_label(sample, "Education Sample");
    let _ = tree.insert(sample, general, None);
    let _ = tree.insert(sample, details, None);
    sample
}

fn sample_section(tree: &mut ContentTree, name: &str) -> NodeId {
    let samples = tree.alloc(NodeKind::sequence());
    let _ = tree.set_label(samples, "Samples");
    for _ in 0..2 {
        let entry = sample(tree);
        let _ = tree.insert(samples, entry, None);
    }
    let samples = tree
        .decorate(
            samples,
            Decoration::BoxMargin(Margins::new("-5px", "0px", "0px", "10px")),
        )
        .unwrap_or(samples);

    let section = section_header(tree, name);
    let _ = tree.insert(section, samples, None);
    section
}

fn sample(tree: &mut ContentTree) -> NodeId {
    let general = bold_tabular(
        tree,
        &[
            Cell::Text("[Project Name/Title]"),
            Cell::Text("[Company]"),
            Cell::Text("[Period]"),
            Cell::Link("[Link to Project]", "[Project Link]"),
        ],
    );
    let _ = tree.set_label(general, "General Info");

    let details = tree.alloc(NodeKind::unordered_list());
    let _ = tree.set_label(details, "Details");
    let entries = [
        text_sequence(tree, "[description 1]"),
        text_sequence(tree, "[description 2]"),
        key_list_pair(
            tree,
            "Utilized",
            &["Tool 1", "Tool 2", "Skill 1", "Skill 2", "..."],
        ),
    ];
    for entry in entries {
        let _ = tree.insert(details, entry, None);
    }
    let details = tree
        .decorate(
            details,
            Decoration::BoxMargin(Margins::new("-15px", "0px", "-10px", "0px")),
        )
        .unwrap_or(details);

    let sample = tree.alloc(NodeKind::sequence());
    let _ = tree.set_label(sample, "Sample");
    let _ = tree.insert(sample, general, None);
    let _ = tree.insert(sample, details, None);
    sample
}

fn skills(tree: &mut ContentTree) -> NodeId {
    let details = tree.alloc(NodeKind::unordered_list());
    let _ = tree.set_label(details, "Skill Categories");
    let entries = [
        key_list_pair(
            tree,
            "Technical Skills",
            &[
                "Programming Languages",
                "Frameworks/Libraries",
                "Databases",
                "Tools",
            ],
        ),
        key_list_pair(
            tree,
            "Analytical Skills",
            &["Optimization", "Algorithms", "Data Analysis"],
        ),
        key_list_pair(
            tree,
            "Soft Skills",
            &["Teamwork", "Problem Solving", "Time Management"],
        ),
    ];
    for entry in entries {
        let _ = tree.insert(details, entry, None);
    }
    let details = tree
        .decorate(
            details,
            Decoration::BoxMargin(Margins::new("-15px", "0px", "-10px", "0px")),
        )
        .unwrap_or(details);

    let section = section_header(tree, "Skills");
    let _ = tree.insert(section, details, None);
    section
}

/// A section heading: styled level-2 header over a pulled-up rule.
fn section_header(tree: &mut ContentTree, name: &str) -> NodeId {
    let title = header(tree, name, 2);
    let title = tree
        .decorate(title, Decoration::StyledFont(FontStyle::default()))
        .unwrap_or(title);

    let rule = tree.alloc(NodeKind::HLine);
    let rule = tree
        .decorate(
            rule,
            Decoration::BoxMargin(Margins::new("-20px", "0px", "0px", "0px")),
        )
        .unwrap_or(rule);

    let section = tree.alloc(NodeKind::sequence());
    let _ = tree.set_label(section, name);
    let _ = tree.insert(section, title, None);
    let _ = tree.insert(section, rule, None);
    section
}
