//! File layout of an export bundle. Packaging itself happens outside this crate.

pub const README_FILE: &str = "README.txt";
pub const ANDROID_DIR: &str = "android";
pub const WEB_DIR: &str = "web";

pub const AVD_FILE: &str = "animated_vector_drawable.xml";
pub const START_VECTOR_DRAWABLE_FILE: &str = "start_vector_drawable.xml";
pub const END_VECTOR_DRAWABLE_FILE: &str = "end_vector_drawable.xml";
pub const START_SVG_FILE: &str = "start.svg";
pub const END_SVG_FILE: &str = "end.svg";

/// Bundle-relative paths of every file, README first.
pub fn bundle_paths() -> Vec<String> {
    let mut paths = vec![README_FILE.to_owned()];
    paths.extend(
        [AVD_FILE, START_VECTOR_DRAWABLE_FILE, END_VECTOR_DRAWABLE_FILE]
            .map(|f| format!("{ANDROID_DIR}/{f}")),
    );
    paths.extend([START_SVG_FILE, END_SVG_FILE].map(|f| format!("{WEB_DIR}/{f}")));
    paths
}

pub const BUNDLE_README: &str = "\
=== Files exported by shapeshift ===

This archive contains the following:

web/
  - start.svg
  - end.svg

android/
  - start_vector_drawable.xml
  - end_vector_drawable.xml
  - animated_vector_drawable.xml

The android/ files animate with an AnimatedVectorDrawable; the web/ files
are static start and end frames for CSS or SMIL animation.
";
