//! Tmux command rendering.
//!
//! Every function here builds one tmux invocation as a shell command string.
//! Nothing is executed; the strings are handed to [`crate::runner`] or printed
//! by [`crate::preview`]. Optional values that are `None` simply omit their
//! flag, so no function in this module can fail.

/// Wrap a value in double quotes, escaping embedded backslashes and double
/// quotes.
fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Wrap a value in single quotes for use as a trailing shell command.
fn single_quoted(value: &str) -> String {
    format!("'{}'", value.replace('\'', "'\\''"))
}

/// Query whether a session exists.
///
/// Stderr is discarded so the command can be run silently; only its exit
/// status matters.
pub fn has_session(name: &str) -> String {
    format!("tmux has-session -t {} 2>/dev/null", quoted(name))
}

/// Options for [`new_session`].
#[derive(Debug, Default, Clone, Copy)]
pub struct NewSession<'a> {
    /// Working directory of the first window.
    pub cwd: Option<&'a str>,
    /// Name of the first window.
    pub window_name: Option<&'a str>,
    /// Attach to the session instead of failing when it already exists (`-A`).
    pub create_or_attach: bool,
}

/// Create a detached session.
///
/// # Examples
///
/// ```
/// use pane::tmux::{new_session, NewSession};
///
/// let opts = NewSession { window_name: Some("api"), ..Default::default() };
/// assert_eq!(new_session("work", &opts), r#"tmux new-session -n "api" -d -s "work""#);
/// ```
pub fn new_session(name: &str, opts: &NewSession<'_>) -> String {
    let mut args = Vec::new();
    if let Some(window) = opts.window_name {
        args.push(format!("-n {}", quoted(window)));
    }
    if let Some(cwd) = opts.cwd {
        args.push(format!("-c {}", quoted(cwd)));
    }
    if opts.create_or_attach {
        args.push("-A".to_string());
    }
    args.push("-d".to_string());

    format!("tmux new-session {} -s {}", args.join(" "), quoted(name))
}

/// Options for [`new_window`].
#[derive(Debug, Clone, Copy)]
pub struct NewWindow<'a> {
    /// Session the window is created in.
    pub target_session: &'a str,
    /// Working directory of the window.
    pub cwd: Option<&'a str>,
    /// Requested window index; the window is inserted after `index - 1`.
    pub window_index: Option<u32>,
}

/// Create a detached window without switching focus to it.
pub fn new_window(name: &str, opts: &NewWindow<'_>) -> String {
    let mut args = Vec::new();
    match opts.window_index.and_then(|i| i.checked_sub(1)) {
        Some(after) => {
            let target = format!("{}:{}", opts.target_session, after);
            args.push(format!("-a -t {}", quoted(&target)));
        }
        None => args.push(format!("-t {}", quoted(opts.target_session))),
    }
    if let Some(cwd) = opts.cwd {
        args.push(format!("-c {}", quoted(cwd)));
    }
    args.push("-d".to_string());

    format!("tmux new-window {} -n {}", args.join(" "), quoted(name))
}

/// Switch to a window (`session:index`).
pub fn select_window(target: &str) -> String {
    format!("tmux select-window -t {}", quoted(target))
}

/// Make a pane (`session:window.pane`) the active one.
pub fn select_pane(target: &str) -> String {
    format!("tmux select-pane -t {}", quoted(target))
}

/// Direction in which an existing pane is divided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitAxis {
    /// New pane to the right of the target (`-h`, side by side).
    Horizontal,
    /// New pane below the target (`-v`, stacked).
    Vertical,
}

impl SplitAxis {
    /// The `split-window` flag for this axis.
    pub fn flag(self) -> &'static str {
        match self {
            SplitAxis::Horizontal => "-h",
            SplitAxis::Vertical => "-v",
        }
    }
}

/// Options for [`split_window`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitWindow {
    /// Pane being split.
    pub target: String,
    /// Split direction.
    pub axis: SplitAxis,
    /// Size of the new pane as a percentage of the split pane.
    pub percentage: Option<u8>,
    /// Working directory of the new pane.
    pub cwd: Option<String>,
    /// Program started in the new pane instead of tmux's default command.
    pub command: Option<String>,
}

/// Split a pane, creating a new pane at the next free index in the window.
pub fn split_window(opts: &SplitWindow) -> String {
    let mut args = vec![format!("-t {}", quoted(&opts.target)), opts.axis.flag().to_string()];
    if let Some(pct) = opts.percentage {
        args.push(format!("-p {}", pct));
    }
    if let Some(ref cwd) = opts.cwd {
        args.push(format!("-c {}", quoted(cwd)));
    }
    if let Some(ref command) = opts.command {
        args.push(single_quoted(command));
    }

    format!("tmux split-window {}", args.join(" "))
}

/// Attach the current terminal to a session.
pub fn attach_session(target: Option<&str>) -> String {
    match target {
        Some(t) => format!("tmux attach-session -t {}", quoted(t)),
        None => "tmux attach-session".to_string(),
    }
}

/// Type a command into a pane and press Enter (`C-m`).
///
/// When `cwd` is given the command is prefixed with `cd "<cwd>" &&`, unless it
/// already starts with `cd `. That prefix test is textual: a command such as
/// `cd-tool` is left alone, but so is `cd ..; make`, which then runs outside
/// `cwd`. Backslashes and double quotes in the result are escaped.
///
/// # Examples
///
/// ```
/// use pane::tmux::send_keys;
///
/// assert_eq!(
///     send_keys("make", "s:0.1", Some("/src")),
///     r#"tmux send-keys -t "s:0.1" "cd \"/src\" && make" C-m"#
/// );
/// ```
pub fn send_keys(text: &str, target: &str, cwd: Option<&str>) -> String {
    let command = match cwd {
        Some(dir) if !text.starts_with("cd ") => format!("cd \"{}\" && {}", dir, text),
        _ => text.to_string(),
    };

    format!("tmux send-keys -t {} {} C-m", quoted(target), quoted(&command))
}
