//! Hintergrund-Umgebungen (Presets mit zugeordneten Bilddateien).

use serde::{Deserialize, Serialize};

/// Auswählbare Hintergrund-Umgebung des Canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    /// Kein Bild, Canvas-Standardfarbe
    #[default]
    None,
    Forest,
    Jungle,
    Desert,
    Tundra,
    Mountain,
    City,
    Cave,
    Underwater,
}

impl Environment {
    /// Alle Presets in Anzeigereihenfolge.
    pub const ALL: [Environment; 9] = [
        Environment::None,
        Environment::Forest,
        Environment::Jungle,
        Environment::Desert,
        Environment::Tundra,
        Environment::Mountain,
        Environment::City,
        Environment::Cave,
        Environment::Underwater,
    ];

    /// Anzeigename im Auswahlfeld.
    pub fn label(self) -> &'static str {
        match self {
            Environment::None => "Keine",
            Environment::Forest => "Wald",
            Environment::Jungle => "Dschungel",
            Environment::Desert => "Wüste",
            Environment::Tundra => "Tundra",
            Environment::Mountain => "Gebirge",
            Environment::City => "Stadt",
            Environment::Cave => "Höhle",
            Environment::Underwater => "Unterwasser",
        }
    }

    /// Dateiname des Hintergrundbilds (None = kein Bild).
    pub fn image_file(self) -> Option<&'static str> {
        match self {
            Environment::None => None,
            Environment::Forest => Some("bosque.png"),
            Environment::Jungle => Some("selva.png"),
            Environment::Desert => Some("desierto.png"),
            Environment::Tundra => Some("tundra.png"),
            Environment::Mountain => Some("montana.png"),
            Environment::City => Some("ciudad.png"),
            Environment::Cave => Some("caverna.png"),
            Environment::Underwater => Some("acuatico.png"),
        }
    }

    /// Image-URI für den egui-Loader relativ zum Asset-Verzeichnis.
    pub fn image_uri(self, assets_dir: &str) -> Option<String> {
        self.image_file().map(|file| {
            let path = std::path::Path::new(assets_dir).join(file);
            format!("file://{}", path.display())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_has_no_image() {
        assert_eq!(Environment::None.image_file(), None);
        assert_eq!(Environment::None.image_uri("assets"), None);
    }

    #[test]
    fn every_preset_except_none_maps_to_an_image() {
        let with_image = Environment::ALL
            .iter()
            .filter(|env| env.image_file().is_some())
            .count();
        assert_eq!(with_image, Environment::ALL.len() - 1);
    }

    #[test]
    fn image_uri_joins_assets_dir() {
        let uri = Environment::Desert.image_uri("assets").unwrap();
        assert!(uri.starts_with("file://"));
        assert!(uri.ends_with("desierto.png"));
    }
}
