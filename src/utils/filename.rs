use std::{
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
};

/// Inserted between the file stem and the extension when no output path is given
pub const RESIZED_SUFFIX: &str = "_resized";

/// `photo.jpg` becomes `photo_resized.jpg`, in the same directory as the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    PathBuf::from(insert_suffix_before_extension_in_path(
        input.as_os_str(),
        OsStr::new(RESIZED_SUFFIX),
    ))
}

/// If no extension is present, appends to the end.
/// Dotfiles such as `.bashrc` are treated as having no extension.
pub fn insert_suffix_before_extension_in_path(
    os_path_string: &OsStr,
    suffix_to_insert: &OsStr,
) -> OsString {
    let path = Path::new(os_path_string);

    let Some(filename_os_str) = path.file_name() else {
        return append(os_path_string, suffix_to_insert);
    };
    // a name made only of dots, such as `...`, has no extension either
    if filename_os_str.as_encoded_bytes().iter().all(|&byte| byte == b'.') {
        return append(os_path_string, suffix_to_insert);
    }
    let filename_path_view = Path::new(filename_os_str);
    let Some(ext_os_str) = filename_path_view.extension() else {
        return append(os_path_string, suffix_to_insert);
    };
    let stem_os_str = filename_path_view
        .file_stem()
        .unwrap_or_else(|| OsStr::new(""));

    let mut new_filename = OsString::new();
    new_filename.push(stem_os_str);
    new_filename.push(suffix_to_insert);
    new_filename.push(".");
    new_filename.push(ext_os_str);

    match path.parent() {
        // an empty parent means a bare filename; joining onto it is a no-op
        Some(parent_dir) => parent_dir.join(new_filename).into_os_string(),
        None => new_filename,
    }
}

fn append(os_path_string: &OsStr, suffix_to_insert: &OsStr) -> OsString {
    let mut result = os_path_string.to_owned();
    result.push(suffix_to_insert);
    result
}
