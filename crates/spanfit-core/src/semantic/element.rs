//! Element kinds and footprint resolution.
//!
//! The footprint is the length one element occupies along the span for
//! spacing purposes. It is what the solver packs; the physical width only
//! matters for drawing.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use log::debug;
use serde::Deserialize;

use crate::error::PlacementError;

/// Kinds of elements that can be placed across a span.
///
/// The names match external configuration strings (snake_case). The names
/// `rope`, `board` and `board_rope` are accepted as aliases.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// A rope: a point element without width.
    #[default]
    #[serde(alias = "rope")]
    Point,
    /// A board resting on its own edges.
    #[serde(alias = "board")]
    Bar,
    /// A board hung from two ropes inset by the sub offset.
    #[serde(alias = "board_rope")]
    SuspendedBar,
}

impl FromStr for ElementKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "point" | "rope" => Ok(Self::Point),
            "bar" | "board" => Ok(Self::Bar),
            "suspended_bar" | "board_rope" => Ok(Self::SuspendedBar),
            _ => Err("Unsupported element kind"),
        }
    }
}

impl From<ElementKind> for &'static str {
    fn from(val: ElementKind) -> Self {
        match val {
            ElementKind::Point => "point",
            ElementKind::Bar => "bar",
            ElementKind::SuspendedBar => "suspended_bar",
        }
    }
}

impl Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Physical description of the element being placed.
///
/// `width` is ignored for [`ElementKind::Point`]; `sub_offset` is only used
/// by [`ElementKind::SuspendedBar`], where it is the inset of each hanger
/// from the board edge.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElementSpec {
    kind: ElementKind,
    #[serde(default)]
    width: f64,
    #[serde(default)]
    sub_offset: f64,
}

impl ElementSpec {
    /// Creates a rope element.
    pub fn point() -> Self {
        Self {
            kind: ElementKind::Point,
            width: 0.0,
            sub_offset: 0.0,
        }
    }

    /// Creates a board element of the given width.
    pub fn bar(width: f64) -> Self {
        Self {
            kind: ElementKind::Bar,
            width,
            sub_offset: 0.0,
        }
    }

    /// Creates a board of the given width hung at `sub_offset` from each edge.
    pub fn suspended_bar(width: f64, sub_offset: f64) -> Self {
        Self {
            kind: ElementKind::SuspendedBar,
            width,
            sub_offset,
        }
    }

    /// Returns the element kind.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Returns the physical width (zero for ropes).
    pub fn width(&self) -> f64 {
        match self.kind {
            ElementKind::Point => 0.0,
            ElementKind::Bar | ElementKind::SuspendedBar => self.width,
        }
    }

    /// Returns the hanger inset (zero for anything but suspended bars).
    pub fn sub_offset(&self) -> f64 {
        match self.kind {
            ElementKind::SuspendedBar => self.sub_offset,
            ElementKind::Point | ElementKind::Bar => 0.0,
        }
    }

    /// Resolves the footprint used in spacing arithmetic.
    ///
    /// - [`ElementKind::Point`]: always `0`
    /// - [`ElementKind::Bar`]: `width`
    /// - [`ElementKind::SuspendedBar`]: `width - 2 * sub_offset`
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::InvalidFootprint`] when a bar footprint is
    /// not strictly positive (or not finite).
    ///
    /// # Examples
    ///
    /// ```
    /// # use spanfit_core::semantic::ElementSpec;
    /// assert_eq!(ElementSpec::suspended_bar(1200.0, 20.0).footprint(), Ok(1160.0));
    /// assert!(ElementSpec::suspended_bar(40.0, 20.0).footprint().is_err());
    /// ```
    pub fn footprint(&self) -> Result<f64, PlacementError> {
        let footprint = match self.kind {
            ElementKind::Point => return Ok(0.0),
            ElementKind::Bar => self.width,
            ElementKind::SuspendedBar => self.width - 2.0 * self.sub_offset,
        };

        if footprint > 0.0 && footprint.is_finite() {
            Ok(footprint)
        } else {
            debug!(
                kind = self.kind.to_string(),
                width = self.width,
                sub_offset = self.sub_offset,
                footprint = footprint;
                "Element has no usable footprint"
            );
            Err(PlacementError::InvalidFootprint { footprint })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_footprint_is_zero() {
        assert_eq!(ElementSpec::point().footprint(), Ok(0.0));
    }

    #[test]
    fn test_bar_footprint_is_width() {
        assert_eq!(ElementSpec::bar(1200.0).footprint(), Ok(1200.0));
    }

    #[test]
    fn test_bar_with_zero_width_is_invalid() {
        assert_eq!(
            ElementSpec::bar(0.0).footprint(),
            Err(PlacementError::InvalidFootprint { footprint: 0.0 })
        );
    }

    #[test]
    fn test_suspended_bar_footprint_subtracts_both_offsets() {
        assert_eq!(ElementSpec::suspended_bar(1000.0, 100.0).footprint(), Ok(800.0));
    }

    #[test]
    fn test_suspended_bar_offsets_consuming_width_are_invalid() {
        let err = ElementSpec::suspended_bar(200.0, 100.0).footprint().unwrap_err();
        assert_eq!(err, PlacementError::InvalidFootprint { footprint: 0.0 });
        assert!(err.is_fatal());

        assert!(ElementSpec::suspended_bar(200.0, 150.0).footprint().is_err());
    }

    #[test]
    fn test_width_and_offset_ignored_by_kind() {
        let element = ElementSpec {
            kind: ElementKind::Point,
            width: 500.0,
            sub_offset: 20.0,
        };
        assert_eq!(element.width(), 0.0);
        assert_eq!(element.sub_offset(), 0.0);
        assert_eq!(ElementSpec::bar(500.0).sub_offset(), 0.0);
    }

    #[test]
    fn test_kind_from_str_accepts_aliases() {
        assert_eq!("rope".parse::<ElementKind>(), Ok(ElementKind::Point));
        assert_eq!("board".parse::<ElementKind>(), Ok(ElementKind::Bar));
        assert_eq!(
            "board_rope".parse::<ElementKind>(),
            Ok(ElementKind::SuspendedBar)
        );
        assert!("plank".parse::<ElementKind>().is_err());
    }

    #[test]
    fn test_kind_display_round_trips() {
        for kind in [ElementKind::Point, ElementKind::Bar, ElementKind::SuspendedBar] {
            assert_eq!(kind.to_string().parse::<ElementKind>(), Ok(kind));
        }
    }
}
