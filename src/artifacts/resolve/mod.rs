pub mod file_outcome;
pub mod resolver;

/// A well-formed conflict block: start-marker line with an optional label, the
/// "ours" lines, a separator line that is exactly `=======`, the "theirs"
/// lines, and an end-marker line carrying a 7-40 character hex revision id.
/// Non-greedy repetitions keep each match to the shortest satisfying region so
/// adjacent blocks never collapse into one match.
pub const CONFLICT_BLOCK_REGEX: &str =
    r"(?ms)^<<<<<<<[^\n]*\n(.*?)^=======\n.*?^>>>>>>> [0-9a-f]{7,40}\n?";

pub const OURS_MARKER: &str = "<<<<<<<";
pub const SEPARATOR_MARKER: &str = "=======";
