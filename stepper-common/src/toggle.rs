use crate::unit::Unit;

/// Position of the sliding highlight behind the selected toggle option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub index: usize,
    pub count: usize,
}

impl Indicator {
    /// Locate `selected` in `options`; an unknown selection sits at index 0.
    pub fn locate(options: &[Unit], selected: Unit) -> Self {
        Self {
            index: options.iter().position(|u| *u == selected).unwrap_or(0),
            count: options.len(),
        }
    }

    /// Inline style sizing the highlight to one slot and sliding it to `index`.
    pub fn style(&self) -> String {
        let width = 100.0 / self.count.max(1) as f64;
        format!(
            "width: calc({width}% - 2px); height: calc(100% - 4px); transform: translateX({}%);",
            self.index * 100
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_selected() {
        let indicator = Indicator::locate(&Unit::ALL, Unit::Pixel);
        assert_eq!(indicator, Indicator { index: 1, count: 2 });
    }

    #[test]
    fn test_unknown_selection_defaults_to_first() {
        let indicator = Indicator::locate(&[Unit::Pixel], Unit::Percent);
        assert_eq!(indicator.index, 0);
    }

    #[test]
    fn test_style() {
        let style = Indicator { index: 1, count: 2 }.style();
        assert_eq!(
            style,
            "width: calc(50% - 2px); height: calc(100% - 4px); transform: translateX(100%);"
        );
    }

    #[test]
    fn test_style_without_options() {
        let style = Indicator::locate(&[], Unit::Percent).style();
        assert!(style.starts_with("width: calc(100% - 2px)"));
    }
}
