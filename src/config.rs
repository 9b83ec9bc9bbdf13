//! Generator configuration constants.

/// Image-file suffix matched case-sensitively against directory entry names.
pub const IMAGE_SUFFIX: &str = ".png";

/// Resource prefix emitted before each identifier in the generated snippet.
pub const DRAWABLE_PREFIX: &str = "R.drawable";

/// Output filename, written inside the target directory.
pub const OUTPUT_FILENAME: &str = "out.txt";
