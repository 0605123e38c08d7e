//! Catalog values

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{
    uuids::TypedUuid,
    values::{UnknownValue, WireValue},
};

/// Product marker
#[derive(Debug)]
pub struct Product;

/// Product UUID
pub type ProductUuid = TypedUuid<Product>;

/// Garment size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Size {
    /// Extra small
    Xs,
    /// Small
    S,
    /// Medium
    M,
    /// Large
    L,
    /// Extra large
    Xl,
    /// Double extra large
    Xxl,
    /// One size fits all
    FreeSize,
}

impl WireValue for Size {
    const KIND: &'static str = "size";

    const ALL: &'static [Self] = &[
        Self::Xs,
        Self::S,
        Self::M,
        Self::L,
        Self::Xl,
        Self::Xxl,
        Self::FreeSize,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Xs => "XS",
            Self::S => "S",
            Self::M => "M",
            Self::L => "L",
            Self::Xl => "XL",
            Self::Xxl => "XXL",
            Self::FreeSize => "FREE_SIZE",
        }
    }
}

/// Garment color. Lines added without a color fall back to [`Color::Black`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[expect(missing_docs, reason = "color names are self-describing")]
pub enum Color {
    #[default]
    Black,
    White,
    Red,
    Blue,
    Navy,
    Grey,
    Brown,
    Beige,
    Maroon,
    Pink,
    Green,
    Yellow,
    /// Printed or patterned in several colors
    Multi,
}

impl WireValue for Color {
    const KIND: &'static str = "color";

    const ALL: &'static [Self] = &[
        Self::Black,
        Self::White,
        Self::Red,
        Self::Blue,
        Self::Navy,
        Self::Grey,
        Self::Brown,
        Self::Beige,
        Self::Maroon,
        Self::Pink,
        Self::Green,
        Self::Yellow,
        Self::Multi,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Black => "BLACK",
            Self::White => "WHITE",
            Self::Red => "RED",
            Self::Blue => "BLUE",
            Self::Navy => "NAVY",
            Self::Grey => "GREY",
            Self::Brown => "BROWN",
            Self::Beige => "BEIGE",
            Self::Maroon => "MAROON",
            Self::Pink => "PINK",
            Self::Green => "GREEN",
            Self::Yellow => "YELLOW",
            Self::Multi => "MULTI",
        }
    }
}

/// Audience a product is cut for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[expect(missing_docs, reason = "audience names are self-describing")]
pub enum Gender {
    Men,
    Women,
    Kids,
    Unisex,
}

impl WireValue for Gender {
    const KIND: &'static str = "gender";

    const ALL: &'static [Self] = &[Self::Men, Self::Women, Self::Kids, Self::Unisex];

    fn as_str(self) -> &'static str {
        match self {
            Self::Men => "MEN",
            Self::Women => "WOMEN",
            Self::Kids => "KIDS",
            Self::Unisex => "UNISEX",
        }
    }
}

impl Display for Size {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_wire(s)
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_wire(s)
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_wire(s)
    }
}
