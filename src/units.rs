#![allow(missing_docs)]

//! This module defines various unit types and their conversions.

/// Number of square metres in one hectare
pub const SQUARE_METRES_PER_HECTARE: f64 = 10000.0;

macro_rules! unit_struct {
    ($name:ident) => {
        /// Represents a type of quantity.
        #[derive(Debug, Clone, Copy, PartialEq, derive_more::Add, derive_more::Sub)]
        pub struct $name(pub f64);

        impl $name {
            /// Creates a new instance of the unit type from a f64 value.
            pub fn from(val: f64) -> Self {
                Self(val)
            }

            /// Returns the value of the unit type as a f64.
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

macro_rules! impl_mul {
    ($Lhs:ty, $Rhs:ty, $Out:ty) => {
        impl std::ops::Mul<$Rhs> for $Lhs {
            type Output = $Out;
            fn mul(self, rhs: $Rhs) -> $Out {
                <$Out>::from(self.0 * rhs.0)
            }
        }
        impl std::ops::Mul<$Lhs> for $Rhs {
            type Output = $Out;
            fn mul(self, lhs: $Lhs) -> $Out {
                <$Out>::from(self.0 * lhs.0)
            }
        }
    };
}

macro_rules! impl_div {
    ($Lhs:ty, $Rhs:ty, $Out:ty) => {
        impl std::ops::Div<$Rhs> for $Lhs {
            type Output = $Out;
            fn div(self, rhs: $Rhs) -> $Out {
                <$Out>::from(self.0 / rhs.0)
            }
        }
    };
}

// Base quantities
unit_struct!(Money);
unit_struct!(Mass);
unit_struct!(Area);

// Derived quantities
unit_struct!(MoneyPerMass);
unit_struct!(MassPerArea);

// Division rules
impl_div!(Money, Mass, MoneyPerMass);
impl_div!(Mass, Area, MassPerArea);
impl_div!(Mass, MassPerArea, Area);

// Multiplication rules
impl_mul!(MoneyPerMass, Mass, Money);
impl_mul!(MassPerArea, Area, Mass);

impl Area {
    /// An area expressed in hectares, stored in square metres
    pub fn from_hectares(hectares: f64) -> Self {
        Self(hectares * SQUARE_METRES_PER_HECTARE)
    }

    /// The area in hectares
    pub fn to_hectares(self) -> f64 {
        self.0 / SQUARE_METRES_PER_HECTARE
    }
}
