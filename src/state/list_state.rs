use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::state::data_model::{self, ClassDirective, ListRow, RowView};

const SORT_MS_PER_ROW: u64 = 75;
const SORT_MIN_MS: u64 = 100;
const SORT_MAX_MS: u64 = 750;
const SEARCH_FADE_MS: f64 = 650.0;
const EMPTY_QUERY_LEN: f64 = 0.86;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortSpec {
    pub column: String,
    pub order: SortOrder,
}

/// Page-template flags of a list (`ajax-content-resizable`, `ajax-sortable`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub resizable: bool,
    pub auto_sortable: bool,
}

/// Sort duration for `visible` rows: 75ms each, kept within [100ms, 750ms].
pub fn sort_duration(visible: usize) -> Duration {
    let ms = (visible as u64)
        .saturating_mul(SORT_MS_PER_ROW)
        .clamp(SORT_MIN_MS, SORT_MAX_MS);
    Duration::from_millis(ms)
}

/// Fade duration for a search: shorter queries animate slower.
pub fn search_fade_duration(query: &str) -> Duration {
    let len = query.chars().count();
    let divisor = if len == 0 { EMPTY_QUERY_LEN } else { len as f64 };
    Duration::from_secs_f64(SEARCH_FADE_MS / divisor / 1000.0)
}

/// Stable sort of `rows` on `column`, then slides every visible row into its
/// slot. Hidden rows keep their relative place but take no slot.
pub fn sort_rows<R, G>(rows: &mut [R], order: SortOrder, column: &str, rng: &mut G)
where
    R: RowView,
    G: Rng,
{
    let sorted = merge_sort_indices(rows.len(), |a, b| {
        let first = rows[a].column_text(column).unwrap_or_default();
        let second = rows[b].column_text(column).unwrap_or_default();
        let ord = data_model::compare_cells(first, second);
        match order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
    permute(rows, sorted);

    let visible = rows.iter().filter(|row| row.is_visible()).count();
    let effect = sort_duration(visible);

    let mut slot = 0;
    for row in rows.iter_mut().filter(|row| row.is_visible()) {
        row.set_position(slot, effect.mul_f64(rng.random::<f64>()));
        slot += 1;
    }
}

/// Bottom-up merge sort over `0..len`. Only a strictly smaller right element
/// overtakes the left one, so equal elements keep their input order, and an
/// inconsistent comparator yields some permutation instead of a panic.
fn merge_sort_indices<F>(len: usize, mut compare: F) -> Vec<usize>
where
    F: FnMut(usize, usize) -> Ordering,
{
    let mut current: Vec<usize> = (0..len).collect();
    let mut merged = Vec::with_capacity(len);
    let mut width = 1;
    while width < len {
        merged.clear();
        for start in (0..len).step_by(2 * width) {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            let (mut left, mut right) = (start, mid);
            while left < mid && right < end {
                if compare(current[right], current[left]) == Ordering::Less {
                    merged.push(current[right]);
                    right += 1;
                } else {
                    merged.push(current[left]);
                    left += 1;
                }
            }
            merged.extend_from_slice(&current[left..mid]);
            merged.extend_from_slice(&current[right..end]);
        }
        std::mem::swap(&mut current, &mut merged);
        width *= 2;
    }
    current
}

/// Reorders `rows` in place so that position `i` holds the former
/// `rows[order[i]]`.
fn permute<R>(rows: &mut [R], mut order: Vec<usize>) {
    for start in 0..order.len() {
        let mut current = start;
        while order[current] != start {
            let next = order[current];
            rows.swap(current, next);
            order[current] = current;
            current = next;
        }
        order[current] = current;
    }
}

/// Shows rows where any of `columns` contains the normalized `query`, hides
/// the others. Returns the number of matching rows.
pub fn search_rows<R, G>(rows: &mut [R], query: &str, columns: &[String], rng: &mut G) -> usize
where
    R: RowView,
    G: Rng,
{
    let effect = search_fade_duration(query);
    let needle = data_model::normalize(query);

    let mut slot = 0;
    for row in rows.iter_mut() {
        let matched = columns.iter().any(|column| {
            row.column_text(column)
                .map(|text| data_model::normalize(text).contains(&needle))
                .unwrap_or(false)
        });

        if matched {
            if !row.is_visible() {
                row.set_visible(true, effect);
            }
            row.set_position(slot, effect.mul_f64(rng.random::<f64>()));
            slot += 1;
        } else {
            row.set_visible(false, effect);
        }
    }
    slot
}

#[derive(Clone, Debug)]
pub struct ListState {
    name: String,
    main_column: String,
    search_columns: Vec<String>,
    identifier: String,
    columns: Vec<String>,
    rows: Vec<ListRow>,
    options: ListOptions,
    sort_spec: Option<SortSpec>,
    header_orders: BTreeMap<String, SortOrder>,
    unsortable: BTreeSet<String>,
    header_width: Option<f32>,
    search_query: String,
    rng: StdRng,
}

impl ListState {
    /// Builds the list and runs the initial ascending sort on `main_column`.
    pub fn init(
        name: impl Into<String>,
        main_column: impl Into<String>,
        search_columns: Vec<String>,
        identifier: impl Into<String>,
        mut rows: Vec<ListRow>,
    ) -> Self {
        for (sequence, row) in (0u64..).zip(rows.iter_mut()) {
            row.set_sequence(sequence);
        }
        let mut state = Self {
            name: name.into(),
            main_column: main_column.into(),
            search_columns,
            identifier: identifier.into(),
            columns: Vec::new(),
            rows,
            options: ListOptions::default(),
            sort_spec: None,
            header_orders: BTreeMap::new(),
            unsortable: BTreeSet::new(),
            header_width: None,
            search_query: String::new(),
            rng: StdRng::from_os_rng(),
        };
        let main = state.main_column.clone();
        state.sort(SortOrder::Asc, &main);
        state
    }

    pub fn with_options(mut self, options: ListOptions) -> Self {
        self.options = options;
        self
    }

    /// Reseeds the animation jitter; tests use this for repeatable durations.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Fixes the header order; by default it is derived from the rows.
    pub fn with_columns(mut self, columns: Vec<String>) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_unsortable(mut self, columns: &[&str]) -> Self {
        self.unsortable
            .extend(columns.iter().map(|column| column.to_string()));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn main_column(&self) -> &str {
        &self.main_column
    }

    pub fn search_columns(&self) -> &[String] {
        &self.search_columns
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn columns(&self) -> Vec<String> {
        if self.columns.is_empty() {
            data_model::derive_columns(&self.rows)
        } else {
            self.columns.clone()
        }
    }

    pub fn options(&self) -> ListOptions {
        self.options
    }

    pub fn rows(&self) -> &[ListRow] {
        &self.rows
    }

    pub fn row(&self, id: &str) -> Option<&ListRow> {
        self.rows.iter().find(|row| row.id() == id)
    }

    pub(crate) fn row_mut(&mut self, id: &str) -> Option<&mut ListRow> {
        self.rows.iter_mut().find(|row| row.id() == id)
    }

    pub fn visible_rows(&self) -> impl Iterator<Item = &ListRow> {
        self.rows.iter().filter(|row| row.is_visible())
    }

    pub fn sort_spec(&self) -> Option<&SortSpec> {
        self.sort_spec.as_ref()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn is_sortable(&self, column: &str) -> bool {
        !self.unsortable.contains(column)
    }

    /// DOM id of the list container.
    pub fn element_id(&self) -> String {
        format!("{}_list", self.name)
    }

    /// CSS class of a column cell, e.g. `users_login`.
    pub fn column_class(&self, column: &str) -> String {
        format!("{}_{column}", self.name)
    }

    /// Ties keep insertion order, whatever the previous sort left behind.
    pub fn sort(&mut self, order: SortOrder, column: &str) {
        self.rows.sort_by_key(ListRow::sequence);
        sort_rows(&mut self.rows, order, column, &mut self.rng);
        self.header_orders.insert(column.to_string(), order);
        self.sort_spec = Some(SortSpec {
            column: column.to_string(),
            order,
        });
    }

    /// Sort triggered by a header click. Each column remembers the direction
    /// it was last sorted in and flips it; a column never sorted starts asc.
    pub fn header_click(&mut self, column: &str) -> bool {
        if !self.is_sortable(column) {
            return false;
        }
        let next = self
            .header_orders
            .get(column)
            .map(|order| order.toggled())
            .unwrap_or(SortOrder::Asc);
        self.sort(next, column);
        true
    }

    pub fn resort(&mut self) {
        if let Some(spec) = self.sort_spec.clone() {
            self.sort(spec.order, &spec.column);
        }
    }

    /// Filters rows on the configured search columns, then re-applies the
    /// current sort to the surviving rows.
    pub fn search(&mut self, query: &str) -> usize {
        self.search_query = query.to_string();
        let matched = search_rows(&mut self.rows, query, &self.search_columns, &mut self.rng);
        self.resort();
        matched
    }

    /// Appends `row`, or inserts it right after `after`. Refuses duplicate
    /// ids and unknown anchors.
    pub fn add_row(&mut self, mut row: ListRow, after: Option<&str>) -> bool {
        if self.row(row.id()).is_some() {
            return false;
        }

        let index = match after {
            None => self.rows.len(),
            Some(anchor) => match self.rows.iter().position(|r| r.id() == anchor) {
                Some(pos) => pos + 1,
                None => return false,
            },
        };

        if let (true, Some(width)) = (self.options.resizable, self.header_width) {
            row.set_width(width);
        }
        let sequence = match after {
            None => self.rows.iter().map(|r| r.sequence() + 1).max().unwrap_or(0),
            Some(anchor) => self.make_room_after(anchor),
        };
        row.set_sequence(sequence);
        self.rows.insert(index, row);

        if self.options.auto_sortable {
            self.resort();
        } else {
            self.compact();
        }
        true
    }

    pub fn del_row(&mut self, id: &str) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.id() != id);
        if self.rows.len() == before {
            return false;
        }

        if self.options.auto_sortable {
            self.resort();
        } else {
            self.compact();
        }
        true
    }

    pub fn update_row_value(
        &mut self,
        id: &str,
        column: &str,
        value: &str,
        directives: &[&str],
    ) -> bool {
        let Some(row) = self.row_mut(id) else {
            return false;
        };
        row.set_column_text(column, value);
        for directive in directives.iter().filter_map(|raw| ClassDirective::parse(raw)) {
            match directive {
                ClassDirective::Add(class) => row.set_column_class(column, &class, true),
                ClassDirective::Remove(class) => row.set_column_class(column, &class, false),
            };
        }
        true
    }

    pub fn change_locked_state(&mut self, id: &str, locked: bool) -> bool {
        self.set_cell_flag(id, "locked", "is_locked", locked)
    }

    pub fn change_permissive_state(&mut self, id: &str, permissive: bool) -> bool {
        self.set_cell_flag(id, "permissive", "is_permissive", permissive)
    }

    fn set_cell_flag(&mut self, id: &str, column: &str, class: &str, on: bool) -> bool {
        self.row_mut(id)
            .map(|row| row.set_column_class(column, class, on))
            .unwrap_or(false)
    }

    /// Applies the header width to every row of a resizable list.
    pub fn set_header_width(&mut self, width: f32) {
        self.header_width = Some(width);
        if self.options.resizable {
            for row in &mut self.rows {
                row.set_width(width);
            }
        }
    }

    /// Master checkbox: every enabled, visible row checkbox follows it.
    /// Returns how many rows changed.
    pub fn massive_select(&mut self, checked: bool) -> usize {
        let mut changed = 0;
        for row in self
            .rows
            .iter_mut()
            .filter(|row| !row.is_disabled() && row.is_visible())
        {
            if row.is_checked() != checked {
                row.set_checked(checked);
                changed += 1;
            }
        }
        changed
    }

    pub fn set_row_checked(&mut self, id: &str, checked: bool) -> bool {
        match self.row_mut(id) {
            Some(row) if !row.is_disabled() => {
                row.set_checked(checked);
                true
            }
            _ => false,
        }
    }

    /// Text of `column` for each checked row, in display order.
    pub fn checked_values(&self, column: &str) -> Vec<String> {
        self.rows
            .iter()
            .filter(|row| row.is_checked())
            .filter_map(|row| row.column_text(column).map(str::to_string))
            .collect()
    }

    /// Shifts every row inserted after `anchor` one step later and returns the
    /// freed sequence number.
    fn make_room_after(&mut self, anchor: &str) -> u64 {
        let anchor_sequence = self.row(anchor).map(ListRow::sequence).unwrap_or(0);
        for row in &mut self.rows {
            if row.sequence() > anchor_sequence {
                row.set_sequence(row.sequence() + 1);
            }
        }
        anchor_sequence + 1
    }

    /// Re-slots visible rows in their current order without animation.
    fn compact(&mut self) {
        let mut slot = 0;
        for row in self.rows.iter_mut().filter(|row| row.is_visible()) {
            row.set_position(slot, Duration::ZERO);
            slot += 1;
        }
    }
}
