/// Human label for a link type, as shown on a project card.
pub fn display_name(link_type: &str) -> String {
    let known = match link_type {
        "repository" => Some("Source Code"),
        "demo" => Some("Live Demo"),
        "live" => Some("Live Site"),
        "frontend" => Some("Frontend"),
        "backend" => Some("Backend API"),
        "portfolio" => Some("Portfolio"),
        "website" => Some("Website"),
        "github" => Some("GitHub"),
        "gitlab" => Some("GitLab"),
        "bitbucket" => Some("Bitbucket"),
        _ => None,
    };

    match known {
        Some(label) => label.to_string(),
        None => capitalize(link_type),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_types_have_labels() {
        assert_eq!(display_name("repository"), "Source Code");
        assert_eq!(display_name("demo"), "Live Demo");
        assert_eq!(display_name("backend"), "Backend API");
        assert_eq!(display_name("github"), "GitHub");
    }

    #[test]
    fn unknown_types_are_capitalized() {
        assert_eq!(display_name("docs"), "Docs");
        assert_eq!(display_name("api-reference"), "Api-reference");
        assert_eq!(display_name("ñandu"), "Ñandu");
    }

    #[test]
    fn empty_type_stays_empty() {
        assert_eq!(display_name(""), "");
    }
}
