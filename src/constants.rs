//! Common constants used throughout the wedgen application.

/// Relative path of the template source file that receives substitutions
pub const MAIN_SOURCE_FILE: &str = "lib/main.dart";

/// Relative path of the test scaffold that never ships in a generated app
pub const SCAFFOLD_FILE: &str = "test/widget_test.dart";

/// Accent color applied when the form leaves the color unset
pub const DEFAULT_COLOR: &str = "#B0848B";

/// Font family applied when the form leaves the font unset
pub const DEFAULT_FONT: &str = "Sans";

/// Filename suggested to the caller for the downloaded archive
pub const DOWNLOAD_FILENAME: &str = "wedding_app.zip";
