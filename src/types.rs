/// What validation needs to know about a selected file.
#[derive(Clone, Debug, PartialEq)]
pub struct FileInfo {
    pub name: String,
    pub size: u64,
}

impl FileInfo {
    pub fn from_file(file: &web_sys::File) -> Self {
        Self {
            name: file.name(),
            size: file.size().max(0.0) as u64,
        }
    }
}

/// Viewport-relative box, as returned by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl From<&web_sys::DomRect> for Rect {
    fn from(r: &web_sys::DomRect) -> Self {
        Self {
            left: r.left(),
            top: r.top(),
            width: r.width(),
            height: r.height(),
        }
    }
}

/// Highlight colours applied to a drop zone while a drag hovers it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Palette {
    #[default]
    Primary,
    Secondary,
}

impl Palette {
    pub const ALL: [Palette; 2] = [Palette::Primary, Palette::Secondary];

    pub fn classes(self) -> [&'static str; 2] {
        match self {
            Palette::Primary => ["border-primary-500", "bg-primary-50"],
            Palette::Secondary => ["border-green-500", "bg-green-50"],
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "primary" => Some(Palette::Primary),
            "secondary" => Some(Palette::Secondary),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_parse() {
        assert_eq!(Palette::parse("primary"), Some(Palette::Primary));
        assert_eq!(Palette::parse(" Secondary "), Some(Palette::Secondary));
        assert_eq!(Palette::parse("green"), None);
    }
}
