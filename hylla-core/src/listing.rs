//! Text forms of a project for `hylla list`.

use crate::types::Project;

/// Launch-script characters shown in the detailed listing.
pub const SCRIPT_PREVIEW_CHARS: usize = 24;

/// One line per project: the name padded or shortened so tags roughly line up.
///
/// Names up to 7 characters get two tabs, up to 15 one tab, and longer names
/// are cut to 13 characters followed by `..`.
pub fn summary_line(project: &Project) -> String {
    let name = project.name.as_str();
    let len = name.chars().count();
    let tags = project.tags_text();
    if len <= 7 {
        format!("{name}\t\ttags:{tags}")
    } else if len > 15 {
        let short: String = name.chars().take(13).collect();
        format!("{short}..\ttags:{tags}")
    } else {
        format!("{name}\ttags:{tags}")
    }
}

/// Header line of the detailed listing: `#id  name  date`.
pub fn detail_header(project: &Project) -> String {
    format!("#{}  {}  {}", project.id, project.name, project.created)
}

/// Indented body lines of the detailed listing.
pub fn detail_body(project: &Project) -> Vec<String> {
    vec![
        format!("\ttags: {}", project.tags_text()),
        format!("\tpath: {}", project.path.display()),
        format!("\tcommands: {}", script_preview(&project.launch_script)),
    ]
}

/// The first 24 characters of a launch script, with `...` only if it was cut.
pub fn script_preview(script: &str) -> String {
    let mut chars = script.chars();
    let head: String = chars.by_ref().take(SCRIPT_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
