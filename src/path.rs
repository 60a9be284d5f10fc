pub fn normalize_path(raw: &str) -> String {
    if !looks_like_drive_path(raw) {
        return raw.to_string();
    }

    match raw.split_once(':') {
        Some((drive, rest)) => format!("/mnt/{}{}", drive.to_lowercase(), rest.replace('\\', "/")),
        None => raw.to_string(),
    }
}

fn looks_like_drive_path(raw: &str) -> bool {
    raw.contains(':') && raw.contains('\\')
}
