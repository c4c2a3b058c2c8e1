//! Time picker behavior: generates a time option list, then hands the rest
//! of the interaction to the combo box.
//!
//! Install order matters: this behavior enhances its markup into a combo box
//! before the combo box behavior tags parts, exactly like the upstream
//! widget transforms its markup and then initializes the combo box on it.

use std::sync::LazyLock;

use paperdom::{Element, Event};
use regex::Regex;

use crate::behavior::{collect_matching, has_part, Behavior, PartSpec, Selector};
use crate::context::BehaviorContext;
use crate::events::EventResult;
use crate::registry::BehaviorRegistration;
use crate::widgets::combo_box;

pub const NAME: &str = "time-picker";

/// Part kinds.
pub const ROOT: &str = "time-picker";

pub const CLASS_ROOT: &str = "usa-time-picker";

pub const MIN_TIME_ATTR: &str = "data-min-time";
pub const MAX_TIME_ATTR: &str = "data-max-time";
pub const STEP_ATTR: &str = "data-step";

const DEFAULT_MIN: u32 = 0;
const DEFAULT_MAX: u32 = 23 * 60 + 59;
const DEFAULT_STEP: u32 = 30;

const PARTS: &[PartSpec] = &[PartSpec::new(ROOT, Selector::Class(CLASS_ROOT))];

static TIME_24H: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").unwrap());

#[derive(Debug, Default)]
pub struct TimePicker;

impl Behavior for TimePicker {
    fn name(&self) -> &'static str {
        NAME
    }

    fn parts(&self) -> &'static [PartSpec] {
        PARTS
    }

    /// Before the combo box.
    fn order(&self) -> i8 {
        -1
    }

    fn init(&self, root: &str, ctx: &mut BehaviorContext) {
        let pickers = match ctx.doc.get(root) {
            Some(el) => collect_matching(el, |el| has_part(el, ROOT)),
            None => return,
        };
        for picker in pickers {
            enhance(&picker, ctx);
        }
    }

    fn handle(
        &self,
        _kind: &str,
        _event: &Event,
        _target: &str,
        _ctx: &mut BehaviorContext,
    ) -> EventResult {
        // All interaction belongs to the combo box this widget becomes.
        EventResult::Ignored
    }
}

/// Turn a time picker root into a combo box with a generated option list.
fn enhance(picker: &str, ctx: &mut BehaviorContext) {
    let Some(picker_el) = ctx.doc.get(picker) else {
        return;
    };

    let min = picker_el
        .get_attr(MIN_TIME_ATTR)
        .and_then(parse_time)
        .unwrap_or(DEFAULT_MIN);
    let max = picker_el
        .get_attr(MAX_TIME_ATTR)
        .and_then(parse_time)
        .unwrap_or(DEFAULT_MAX);
    let step = picker_el
        .get_attr(STEP_ATTR)
        .and_then(|v| v.parse().ok())
        .filter(|step| *step > 0)
        .unwrap_or(DEFAULT_STEP);

    let has_select =
        !collect_matching(picker_el, |el| el.has_class(combo_box::CLASS_SELECT)).is_empty();
    let input = collect_matching(picker_el, |el| el.tag == "input")
        .into_iter()
        .next();

    if let Some(el) = ctx.doc.get_mut(picker) {
        el.add_class(combo_box::CLASS_ROOT);
    }
    if let Some(input) = input {
        if let Some(el) = ctx.doc.get_mut(&input) {
            el.add_class(combo_box::CLASS_INPUT);
        }
    } else {
        log::warn!("[time-picker] `{picker}` has no input element");
    }

    if !has_select {
        let mut options = Vec::new();
        let mut minutes = min;
        while minutes <= max {
            options.push(
                Element::new("option")
                    .id(format!("{picker}__time-{minutes}"))
                    .attr("data-value", format_24h(minutes))
                    .text(format_label(minutes)),
            );
            minutes += step;
        }
        let select = Element::div()
            .id(format!("{picker}__select"))
            .class(combo_box::CLASS_SELECT)
            .hidden()
            .children(options);
        ctx.doc.append_child(picker, select);
    }
}

/// Minutes since midnight from `HH:MM`.
fn parse_time(value: &str) -> Option<u32> {
    let captures = TIME_24H.captures(value.trim())?;
    let hours: u32 = captures[1].parse().ok()?;
    let minutes: u32 = captures[2].parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * 60 + minutes)
}

fn format_24h(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// `390` → `6:30am`, the label format of the reference widget.
fn format_label(minutes: u32) -> String {
    let hours = minutes / 60;
    let suffix = if hours < 12 { "am" } else { "pm" };
    let display_hours = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{display_hours}:{:02}{suffix}", minutes % 60)
}

fn build() -> Box<dyn Behavior> {
    Box::new(TimePicker)
}

inventory::submit! {
    BehaviorRegistration::new(NAME, build)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_24_hour_times() {
        assert_eq!(parse_time("09:30"), Some(570));
        assert_eq!(parse_time("23:59"), Some(1439));
        assert_eq!(parse_time("24:00"), None);
        assert_eq!(parse_time("noon"), None);
    }

    #[test]
    fn labels_use_12_hour_clock() {
        assert_eq!(format_label(0), "12:00am");
        assert_eq!(format_label(390), "6:30am");
        assert_eq!(format_label(720), "12:00pm");
        assert_eq!(format_label(810), "1:30pm");
    }
}
