//! Twelve-box sign chart combining the birth chart with Katapayadi entries.

use nama_base::{ChartBody, ChartPoint, Graha, PlanetaryDataset};
use serde::Serialize;

use crate::session::KatapayadiSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MarkerKind {
    Lagna,
    Moon,
    Planet,
    /// AL, VL, HL or GL.
    Special,
    Entry,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Marker {
    pub label: String,
    pub kind: MarkerKind,
    /// Set on the selected Katapayadi entry.
    pub highlighted: bool,
}

impl Marker {
    fn plain(label: impl Into<String>, kind: MarkerKind) -> Self {
        Self {
            label: label.into(),
            kind,
            highlighted: false,
        }
    }
}

/// One marker list per sign, index 0 = Aries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SignChart {
    boxes: [Vec<Marker>; 12],
}

impl SignChart {
    pub fn boxes(&self) -> &[Vec<Marker>; 12] {
        &self.boxes
    }

    /// Markers in a 0-based sign. Empty for an out-of-range index.
    pub fn sign(&self, sign_index: u8) -> &[Marker] {
        self.boxes
            .get(sign_index as usize)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn push(&mut self, sign_index: u8, marker: Marker) {
        if let Some(b) = self.boxes.get_mut(sign_index as usize) {
            b.push(marker);
        }
    }
}

/// Short label: "AS" for the Lagna, else the first two letters of the name.
pub fn body_label(body: ChartBody) -> String {
    match body {
        ChartBody::Lagna => "AS".to_string(),
        other => other.name().chars().take(2).collect(),
    }
}

fn body_kind(body: ChartBody) -> MarkerKind {
    match body {
        ChartBody::Lagna => MarkerKind::Lagna,
        ChartBody::Graha(Graha::Chandra) => MarkerKind::Moon,
        _ => MarkerKind::Planet,
    }
}

/// Build the chart: bodies, then special points, then entries by rashi.
///
/// With `selected` set only that entry is placed, highlighted.
pub fn sign_chart(
    dataset: &PlanetaryDataset,
    points: &[ChartPoint],
    session: &KatapayadiSession,
    selected: Option<u64>,
) -> SignChart {
    let mut chart = SignChart::default();

    for p in dataset.positions() {
        let body = p.body();
        chart.push(p.sign_index(), Marker::plain(body_label(body), body_kind(body)));
    }
    for pt in points {
        chart.push(pt.sign_index, Marker::plain(pt.kind.label(), MarkerKind::Special));
    }
    for entry in session.filtered(selected) {
        chart.push(
            entry.rashi() - 1,
            Marker {
                label: entry.original.clone(),
                kind: MarkerKind::Entry,
                highlighted: selected == Some(entry.id),
            },
        );
    }
    chart
}

#[cfg(test)]
mod tests {
    use super::*;
    use nama_base::{ChartPointKind, PlanetPosition};

    use crate::session::InputMode;

    fn dataset() -> PlanetaryDataset {
        let p = |b, lon| PlanetPosition::with_derived_navamsa(b, lon, false).unwrap();
        PlanetaryDataset::new(
            vec![
                p(ChartBody::Lagna, 95.0),
                p(ChartBody::Graha(Graha::Chandra), 100.0),
                p(ChartBody::Graha(Graha::Guru), 250.0),
            ],
            24.0,
        )
    }

    fn session() -> KatapayadiSession {
        let mut s = KatapayadiSession::new();
        s.process("rama", InputMode::Roman).unwrap();
        s.process("राम्", InputMode::Devanagari).unwrap();
        s
    }

    #[test]
    fn labels() {
        assert_eq!(body_label(ChartBody::Lagna), "AS");
        assert_eq!(body_label(ChartBody::Graha(Graha::Guru)), "Ju");
        assert_eq!(body_label(ChartBody::Pranapada), "Pr");
    }

    #[test]
    fn bodies_points_and_entries() {
        let points = [ChartPoint {
            kind: ChartPointKind::Al,
            sign_index: 3,
        }];
        let chart = sign_chart(&dataset(), &points, &session(), None);

        let cancer: Vec<&str> = chart.sign(3).iter().map(|m| m.label.as_str()).collect();
        // "rama" → rashi 4 (Cancer).
        assert_eq!(cancer, vec!["AS", "Mo", "AL", "rama"]);
        assert_eq!(chart.sign(3)[1].kind, MarkerKind::Moon);
        assert_eq!(chart.sign(8)[0].label, "Ju");
        // "राम्" → 2 → Taurus.
        assert_eq!(chart.sign(1)[0].label, "राम्");
        assert!(chart.boxes().iter().flatten().all(|m| !m.highlighted));
    }

    #[test]
    fn selection_filters_and_highlights() {
        let chart = sign_chart(&dataset(), &[], &session(), Some(2));
        let entries: Vec<&Marker> = chart
            .boxes()
            .iter()
            .flatten()
            .filter(|m| m.kind == MarkerKind::Entry)
            .collect();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].highlighted);
        assert_eq!(entries[0].label, "राम्");
    }

    #[test]
    fn out_of_range_sign_is_empty() {
        assert!(SignChart::default().sign(12).is_empty());
    }
}
