// crates/toiletmap-core/src/popup.rs
use crate::map::Marker;

/// Separator between the two lines encoded in a marker snippet.
pub const SNIPPET_DELIMITER: char = '\n';

/// What a popup shows for one marker. Rebuilt on every display.
///
/// A `None` line is a hidden text slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupContent {
    pub title: Option<String>,
    pub lines: [Option<String>; 2],
}

impl PopupContent {
    pub fn visible_lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().filter_map(|line| line.as_deref())
    }

    pub fn visible_line_count(&self) -> usize {
        self.visible_lines().count()
    }
}

/// Pluggable renderer for the content shown when a marker is tapped.
pub trait PopupAdapter {
    fn render(&self, marker: &Marker) -> PopupContent;
}

/// Splits the `"<label>\n<hours>"` snippet into two text slots.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToiletPopupAdapter;

impl PopupAdapter for ToiletPopupAdapter {
    fn render(&self, marker: &Marker) -> PopupContent {
        PopupContent {
            title: marker.title.clone(),
            lines: split_snippet(marker.snippet.as_deref()),
        }
    }
}

/// At most two parts; parts beyond the second are ignored and empty
/// parts are hidden.
pub fn split_snippet(snippet: Option<&str>) -> [Option<String>; 2] {
    let mut parts = snippet
        .into_iter()
        .flat_map(|s| s.split(SNIPPET_DELIMITER))
        .map(|part| (!part.is_empty()).then(|| part.to_string()));
    let first = parts.next().flatten();
    let second = parts.next().flatten();
    [first, second]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LatLng;

    fn marker(snippet: Option<&str>) -> Marker {
        Marker {
            id: 0,
            position: LatLng::new(55.0, 12.0),
            title: Some("Kongens Have".into()),
            snippet: snippet.map(String::from),
        }
    }

    fn render(snippet: Option<&str>) -> PopupContent {
        ToiletPopupAdapter.render(&marker(snippet))
    }

    #[test]
    fn two_parts_fill_both_slots() {
        let popup = render(Some("Handicapvenlig\n00-24"));
        assert_eq!(popup.title.as_deref(), Some("Kongens Have"));
        assert_eq!(
            popup.lines,
            [Some("Handicapvenlig".to_string()), Some("00-24".to_string())]
        );
    }

    #[test]
    fn slot_count_follows_part_count() {
        assert_eq!(render(None).visible_line_count(), 0);
        assert_eq!(render(Some("")).visible_line_count(), 0);
        assert_eq!(render(Some("only")).visible_line_count(), 1);
        assert_eq!(render(Some("a\nb")).visible_line_count(), 2);
    }

    #[test]
    fn parts_beyond_two_are_ignored() {
        let popup = render(Some("a\nb\nc\nd"));
        assert_eq!(popup.visible_lines().collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn empty_parts_are_hidden() {
        assert_eq!(
            render(Some("Ikke handicapvenlig\n")).lines,
            [Some("Ikke handicapvenlig".to_string()), None]
        );
        assert_eq!(render(Some("\n07-22")).lines, [None, Some("07-22".to_string())]);
    }

    #[test]
    fn missing_title_stays_missing() {
        let mut m = marker(Some("a"));
        m.title = None;
        assert_eq!(ToiletPopupAdapter.render(&m).title, None);
    }
}
