use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

/// Vertical distance between two list slots, in pixels.
pub const ROW_HEIGHT_PX: usize = 51;

/// What a list engine needs from a rendered row. Hosts (the Dioxus view,
/// tests, anything else) implement this so sorting and searching never touch
/// a concrete widget tree.
pub trait RowView {
    fn id(&self) -> &str;
    fn column_text(&self, column: &str) -> Option<&str>;
    fn is_visible(&self) -> bool;
    fn set_visible(&mut self, visible: bool, fade: Duration);
    fn set_position(&mut self, slot: usize, duration: Duration);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stripe {
    Even,
    Odd,
}

impl Stripe {
    pub fn for_slot(slot: usize) -> Self {
        if slot % 2 == 0 {
            Self::Even
        } else {
            Self::Odd
        }
    }

    /// Zebra classes carried by the `odd_even_typed` cells of a row.
    pub fn classes(self, list_name: &str) -> String {
        match self {
            Self::Even => format!("{list_name}_row_even row_even even"),
            Self::Odd => format!("{list_name}_row_odd row_odd odd"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub classes: BTreeSet<String>,
}

/// One entity line of a list: a user, a group, a machine.
#[derive(Clone, Debug, PartialEq)]
pub struct ListRow {
    id: String,
    cells: BTreeMap<String, Cell>,
    visible: bool,
    fade_duration: Duration,
    slot: usize,
    move_duration: Duration,
    checked: bool,
    disabled: bool,
    selected: bool,
    width: Option<f32>,
    /// Position in insertion (DOM) order; sort ties fall back to it.
    sequence: u64,
}

impl ListRow {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            cells: BTreeMap::new(),
            visible: true,
            fade_duration: Duration::ZERO,
            slot: 0,
            move_duration: Duration::ZERO,
            checked: false,
            disabled: false,
            selected: false,
            width: None,
            sequence: 0,
        }
    }

    pub fn with_column(mut self, column: impl Into<String>, text: impl Into<String>) -> Self {
        self.cells.insert(
            column.into(),
            Cell {
                text: text.into(),
                classes: BTreeSet::new(),
            },
        );
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &Cell)> {
        self.cells.iter().map(|(name, cell)| (name.as_str(), cell))
    }

    pub fn cell(&self, column: &str) -> Option<&Cell> {
        self.cells.get(column)
    }

    /// Replaces the text of a cell, creating it when the row lacked the column.
    pub fn set_column_text(&mut self, column: &str, text: impl Into<String>) {
        self.cells.entry(column.to_string()).or_default().text = text.into();
    }

    /// Returns false when the row has no such column.
    pub fn set_column_class(&mut self, column: &str, class: &str, enabled: bool) -> bool {
        let Some(cell) = self.cells.get_mut(column) else {
            return false;
        };
        if enabled {
            cell.classes.insert(class.to_string());
        } else {
            cell.classes.remove(class);
        }
        true
    }

    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn offset_px(&self) -> usize {
        self.slot * ROW_HEIGHT_PX
    }

    pub fn stripe(&self) -> Stripe {
        Stripe::for_slot(self.slot)
    }

    pub fn fade_duration(&self) -> Duration {
        self.fade_duration
    }

    pub fn move_duration(&self) -> Duration {
        self.move_duration
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub fn width(&self) -> Option<f32> {
        self.width
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = Some(width);
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub(crate) fn set_sequence(&mut self, sequence: u64) {
        self.sequence = sequence;
    }
}

impl RowView for ListRow {
    fn id(&self) -> &str {
        &self.id
    }

    fn column_text(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(|cell| cell.text.as_str())
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool, fade: Duration) {
        if visible != self.visible {
            self.fade_duration = fade;
        }
        self.visible = visible;
    }

    fn set_position(&mut self, slot: usize, duration: Duration) {
        self.slot = slot;
        self.move_duration = duration;
    }
}

/// Returns the sorted union of all column names across all rows.
pub fn derive_columns(rows: &[ListRow]) -> Vec<String> {
    let mut cols = BTreeSet::new();
    for row in rows {
        for (name, _) in row.columns() {
            cols.insert(name.to_string());
        }
    }
    cols.into_iter().collect()
}

/// Class directive for `update_row_value`: `+name` adds `name`, any other
/// directive removes the class named by everything after its first character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClassDirective {
    Add(String),
    Remove(String),
}

impl ClassDirective {
    pub fn parse(raw: &str) -> Option<Self> {
        let mut chars = raw.chars();
        let first = chars.next()?;
        let class = chars.as_str().to_string();
        if class.is_empty() {
            return None;
        }
        Some(if first == '+' {
            Self::Add(class)
        } else {
            Self::Remove(class)
        })
    }
}

/// Lower-cases and strips accents so "Élodie" matches "elo".
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars().flat_map(char::to_lowercase) {
        match strip_accent(ch) {
            Folded::Char(c) => out.push(c),
            Folded::Pair(pair) => out.push_str(pair),
        }
    }
    out
}

enum Folded {
    Char(char),
    Pair(&'static str),
}

fn strip_accent(ch: char) -> Folded {
    let folded = match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'ď' | 'đ' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => 'i',
        'ł' | 'ľ' | 'ĺ' | 'ļ' => 'l',
        'ñ' | 'ń' | 'ň' | 'ņ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => 'o',
        'ŕ' | 'ř' | 'ŗ' => 'r',
        'ś' | 'ŝ' | 'ş' | 'š' => 's',
        'ţ' | 'ť' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        'æ' => return Folded::Pair("ae"),
        'œ' => return Folded::Pair("oe"),
        'ß' => return Folded::Pair("ss"),
        other => other,
    };
    Folded::Char(folded)
}

/// Row ordering used by every list: numeric when both sides read as non-zero
/// numbers, otherwise case-insensitive text.
///
/// Zero and empty cells are falsy numbers and fall through to the text
/// comparison, so "0" sorts as text against "10".
///
/// Mixed columns make this inconsistent ("2" < "10" < "1a" < "2"), so it
/// must not be handed to `slice::sort_by`.
pub fn compare_cells(first: &str, second: &str) -> Ordering {
    let first = first.to_lowercase();
    let second = second.to_lowercase();

    if let (Some(a), Some(b)) = (truthy_number(&first), truthy_number(&second)) {
        return a.partial_cmp(&b).unwrap_or(Ordering::Equal);
    }
    first.cmp(&second)
}

fn truthy_number(raw: &str) -> Option<f64> {
    let value = raw.trim().parse::<f64>().ok()?;
    (value.is_finite() && value != 0.0).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_french_accents() {
        assert_eq!(normalize("Élodie Œuvré"), "elodie oeuvre");
    }

    #[test]
    fn numeric_cells_compare_by_value() {
        assert_eq!(compare_cells("9", "10"), Ordering::Less);
        assert_eq!(compare_cells("1e3", "999"), Ordering::Greater);
    }

    #[test]
    fn zero_falls_back_to_text() {
        // "0" is not a truthy number, so this is a text comparison.
        assert_eq!(compare_cells("0", "10"), Ordering::Less);
        assert_eq!(compare_cells("0", "-5"), Ordering::Greater);
    }

    #[test]
    fn mixed_cells_can_form_a_cycle() {
        assert_eq!(compare_cells("2", "10"), Ordering::Less);
        assert_eq!(compare_cells("10", "1a"), Ordering::Less);
        assert_eq!(compare_cells("1a", "2"), Ordering::Less);
    }

    #[test]
    fn directives_drop_the_first_character() {
        assert_eq!(ClassDirective::parse("+busy"), Some(ClassDirective::Add("busy".into())));
        assert_eq!(ClassDirective::parse("-busy"), Some(ClassDirective::Remove("busy".into())));
        assert_eq!(ClassDirective::parse("xbusy"), Some(ClassDirective::Remove("busy".into())));
        assert_eq!(ClassDirective::parse("+"), None);
    }
}
