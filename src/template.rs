//! Built-in pane arrangement templates.
//!
//! A template turns an empty window (one pane at index 0) into a fixed
//! arrangement of panes, each reachable through a named position such as
//! `top` or `bottomLeft`.
//!
//! # Pane Indices
//!
//! tmux does not report the index of a pane created by `split-window`; it
//! always hands out the next unused index in the window. Templates therefore
//! predict addresses from the order of their splits, not from where the panes
//! end up on screen. [`PaneAllocator`] tracks that order so each template only
//! states which pane it splits.
//!
//! | Template         | Positions (index)                                      |
//! |------------------|--------------------------------------------------------|
//! | `Single`         | main (0)                                               |
//! | `SplitVertical`  | left (0), right (1)                                    |
//! | `TopSplitBottom` | top (0), bottomLeft (1), bottomRight (2)               |
//! | `Quad`           | topLeft (0), bottomLeft (1), topRight (2), bottomRight (3) |

use crate::error::{PaneError, Result};
use crate::tmux::{self, SplitAxis, SplitWindow};
use std::fmt;
use std::str::FromStr;

/// Address of a pane: `<window target>.<pane index>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneAddress {
    window: String,
    index: u32,
}

impl PaneAddress {
    /// Index of the pane within its window.
    pub fn index(&self) -> u32 {
        self.index
    }
}

impl fmt::Display for PaneAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.window, self.index)
    }
}

/// Hands out pane addresses in the order tmux will assign them.
///
/// Starts with pane 0 already present, as in a freshly created window.
#[derive(Debug)]
pub struct PaneAllocator<'a> {
    window: &'a str,
    cwd: &'a str,
    next: u32,
    ops: Vec<PaneOp>,
}

impl<'a> PaneAllocator<'a> {
    /// Allocator for a new window whose panes all start in `cwd`.
    pub fn new(window: &'a str, cwd: &'a str) -> Self {
        Self {
            window,
            cwd,
            next: 1,
            ops: Vec::new(),
        }
    }

    /// The pane every window is created with.
    pub fn first(&self) -> PaneAddress {
        PaneAddress {
            window: self.window.to_string(),
            index: 0,
        }
    }

    /// Record a split of `base` and return the address of the new pane.
    pub fn split(&mut self, base: &PaneAddress, axis: SplitAxis, percentage: u8) -> PaneAddress {
        let created = PaneAddress {
            window: self.window.to_string(),
            index: self.next,
        };
        self.next += 1;
        self.ops.push(PaneOp::Split(SplitWindow {
            target: base.to_string(),
            axis,
            percentage: Some(percentage),
            cwd: Some(self.cwd.to_string()),
            command: None,
        }));
        created
    }

    /// Record making `pane` the active pane.
    pub fn select(&mut self, pane: &PaneAddress) {
        self.ops.push(PaneOp::Select(pane.clone()));
    }

    fn finish(self, panes: Vec<(&'static str, PaneAddress)>) -> TemplateOutput {
        TemplateOutput {
            ops: self.ops,
            panes,
        }
    }
}

/// One structural step emitted by a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaneOp {
    /// Split an existing pane.
    Split(SplitWindow),
    /// Make a pane active.
    Select(PaneAddress),
}

impl PaneOp {
    /// Render as a tmux command string.
    pub fn render(&self) -> String {
        match self {
            PaneOp::Split(split) => tmux::split_window(split),
            PaneOp::Select(pane) => tmux::select_pane(&pane.to_string()),
        }
    }
}

/// Result of applying a template to a window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateOutput {
    /// Structural operations, in execution order.
    pub ops: Vec<PaneOp>,
    /// Position name to pane address, in the template's declared order.
    pub panes: Vec<(&'static str, PaneAddress)>,
}

impl TemplateOutput {
    /// Look up the pane at a named position.
    pub fn pane(&self, position: &str) -> Option<&PaneAddress> {
        self.panes
            .iter()
            .find(|(name, _)| *name == position)
            .map(|(_, addr)| addr)
    }
}

/// The fixed set of pane arrangements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// One pane filling the window.
    Single,
    /// Two panes side by side.
    SplitVertical,
    /// A 60% top pane over two side-by-side bottom panes.
    TopSplitBottom,
    /// A 2x2 grid.
    Quad,
}

impl Template {
    /// All templates, in registry order.
    pub const ALL: [Template; 4] = [
        Template::Single,
        Template::SplitVertical,
        Template::TopSplitBottom,
        Template::Quad,
    ];

    /// Canonical name used in config files.
    pub fn name(self) -> &'static str {
        match self {
            Template::Single => "Single",
            Template::SplitVertical => "SplitVertical",
            Template::TopSplitBottom => "TopSplitBottom",
            Template::Quad => "Quad",
        }
    }

    /// Position names this template declares, in declaration order.
    pub fn positions(self) -> &'static [&'static str] {
        match self {
            Template::Single => &["main"],
            Template::SplitVertical => &["left", "right"],
            Template::TopSplitBottom => &["top", "bottomLeft", "bottomRight"],
            Template::Quad => &["topLeft", "topRight", "bottomLeft", "bottomRight"],
        }
    }

    /// Build the split/select operations for `window` and map every position
    /// to its pane address.
    pub fn apply(self, window: &str, cwd: &str) -> TemplateOutput {
        let mut alloc = PaneAllocator::new(window, cwd);
        let first = alloc.first();

        match self {
            Template::Single => alloc.finish(vec![("main", first)]),
            Template::SplitVertical => {
                let right = alloc.split(&first, SplitAxis::Horizontal, 50);
                alloc.finish(vec![("left", first), ("right", right)])
            }
            Template::TopSplitBottom => {
                let bottom_left = alloc.split(&first, SplitAxis::Vertical, 40);
                let bottom_right = alloc.split(&bottom_left, SplitAxis::Horizontal, 50);
                alloc.select(&first);
                alloc.finish(vec![
                    ("top", first),
                    ("bottomLeft", bottom_left),
                    ("bottomRight", bottom_right),
                ])
            }
            Template::Quad => {
                // bottomLeft is created before topRight, so it gets index 1.
                let bottom_left = alloc.split(&first, SplitAxis::Vertical, 50);
                let top_right = alloc.split(&first, SplitAxis::Horizontal, 50);
                let bottom_right = alloc.split(&bottom_left, SplitAxis::Horizontal, 50);
                alloc.select(&first);
                alloc.finish(vec![
                    ("topLeft", first),
                    ("topRight", top_right),
                    ("bottomLeft", bottom_left),
                    ("bottomRight", bottom_right),
                ])
            }
        }
    }
}

impl FromStr for Template {
    type Err = PaneError;

    /// Look up a template by name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self> {
        Template::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| PaneError::TemplateNotFound(s.to_string()))
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
