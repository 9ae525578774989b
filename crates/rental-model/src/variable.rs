//! Static classification of the selectable listing columns.
//!
//! Every selectable column belongs to exactly one [`VariableKind`]. The kind
//! decides which chart family the dashboard draws for it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Column holding the raw, city-local price.
pub const RAW_PRICE_COLUMN: &str = "price";
/// Column appended by the currency normalizer (price in MXN).
pub const PRICE_MXN_COLUMN: &str = "price_mxn";
pub const LATITUDE_COLUMN: &str = "latitude";
pub const LONGITUDE_COLUMN: &str = "longitude";

/// Chart family of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariableKind {
    /// Small integer counts, drawn as strip plots.
    Numeric,
    /// Free-form categories, drawn as top-5 (or quantile) bar charts.
    Categorical,
    /// Review scores, drawn as density curves.
    Score,
    /// Boolean-like flags, drawn as two-slice pies.
    Binary,
    /// The normalized price, drawn as price tiers and a map.
    Price,
}

impl VariableKind {
    pub const ALL: [VariableKind; 5] = [
        VariableKind::Numeric,
        VariableKind::Categorical,
        VariableKind::Score,
        VariableKind::Binary,
        VariableKind::Price,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            VariableKind::Numeric => "numeric",
            VariableKind::Categorical => "categorical",
            VariableKind::Score => "score",
            VariableKind::Binary => "binary",
            VariableKind::Price => "price",
        }
    }

    /// Variables of this kind, in selector order.
    pub fn members(self) -> &'static [Variable] {
        match self {
            VariableKind::Numeric => NUMERIC,
            VariableKind::Categorical => CATEGORICAL,
            VariableKind::Score => SCORE,
            VariableKind::Binary => BINARY,
            VariableKind::Price => PRICE,
        }
    }
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A selectable listing column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variable {
    Accommodates,
    Bathrooms,
    Bedrooms,
    Beds,
    HostResponseTime,
    HostVerifications,
    RoomType,
    PropertyType,
    HostAcceptanceRate,
    ReviewScoresRating,
    ReviewScoresAccuracy,
    ReviewScoresCleanliness,
    ReviewScoresCheckin,
    ReviewScoresCommunication,
    ReviewScoresLocation,
    ReviewScoresValue,
    InstantBookable,
    HasAvailability,
    HostIsSuperhost,
    HostHasProfilePic,
    HostIdentityVerified,
    PriceMxn,
}

const NUMERIC: &[Variable] = &[
    Variable::Accommodates,
    Variable::Bathrooms,
    Variable::Bedrooms,
    Variable::Beds,
];

const CATEGORICAL: &[Variable] = &[
    Variable::HostResponseTime,
    Variable::HostVerifications,
    Variable::RoomType,
    Variable::PropertyType,
    Variable::HostAcceptanceRate,
];

const SCORE: &[Variable] = &[
    Variable::ReviewScoresRating,
    Variable::ReviewScoresAccuracy,
    Variable::ReviewScoresCleanliness,
    Variable::ReviewScoresCheckin,
    Variable::ReviewScoresCommunication,
    Variable::ReviewScoresLocation,
    Variable::ReviewScoresValue,
];

const BINARY: &[Variable] = &[
    Variable::InstantBookable,
    Variable::HasAvailability,
    Variable::HostIsSuperhost,
    Variable::HostHasProfilePic,
    Variable::HostIdentityVerified,
];

const PRICE: &[Variable] = &[Variable::PriceMxn];

impl Variable {
    /// Every selectable variable, grouped by kind in selector order.
    pub fn all() -> impl Iterator<Item = Variable> {
        VariableKind::ALL
            .into_iter()
            .flat_map(|kind| kind.members().iter().copied())
    }

    /// Column name in the listing datasets.
    pub fn column(self) -> &'static str {
        match self {
            Variable::Accommodates => "accommodates",
            Variable::Bathrooms => "bathrooms",
            Variable::Bedrooms => "bedrooms",
            Variable::Beds => "beds",
            Variable::HostResponseTime => "host_response_time",
            Variable::HostVerifications => "host_verifications",
            Variable::RoomType => "room_type",
            Variable::PropertyType => "property_type",
            Variable::HostAcceptanceRate => "host_acceptance_rate",
            Variable::ReviewScoresRating => "review_scores_rating",
            Variable::ReviewScoresAccuracy => "review_scores_accuracy",
            Variable::ReviewScoresCleanliness => "review_scores_cleanliness",
            Variable::ReviewScoresCheckin => "review_scores_checkin",
            Variable::ReviewScoresCommunication => "review_scores_communication",
            Variable::ReviewScoresLocation => "review_scores_location",
            Variable::ReviewScoresValue => "review_scores_value",
            Variable::InstantBookable => "instant_bookable",
            Variable::HasAvailability => "has_availability",
            Variable::HostIsSuperhost => "host_is_superhost",
            Variable::HostHasProfilePic => "host_has_profile_pic",
            Variable::HostIdentityVerified => "host_identity_verified",
            Variable::PriceMxn => PRICE_MXN_COLUMN,
        }
    }

    /// Chart family of this variable.
    pub fn kind(self) -> VariableKind {
        match self {
            Variable::Accommodates | Variable::Bathrooms | Variable::Bedrooms | Variable::Beds => {
                VariableKind::Numeric
            }
            Variable::HostResponseTime
            | Variable::HostVerifications
            | Variable::RoomType
            | Variable::PropertyType
            | Variable::HostAcceptanceRate => VariableKind::Categorical,
            Variable::ReviewScoresRating
            | Variable::ReviewScoresAccuracy
            | Variable::ReviewScoresCleanliness
            | Variable::ReviewScoresCheckin
            | Variable::ReviewScoresCommunication
            | Variable::ReviewScoresLocation
            | Variable::ReviewScoresValue => VariableKind::Score,
            Variable::InstantBookable
            | Variable::HasAvailability
            | Variable::HostIsSuperhost
            | Variable::HostHasProfilePic
            | Variable::HostIdentityVerified => VariableKind::Binary,
            Variable::PriceMxn => VariableKind::Price,
        }
    }

    /// Categorical variables that are binned by quantile instead of counted
    /// by raw value.
    pub fn is_quantile_binned(self) -> bool {
        matches!(self, Variable::HostAcceptanceRate)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for Variable {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Variable::all()
            .find(|variable| variable.column() == name)
            .ok_or_else(|| ModelError::UnknownVariable(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_membership() {
        for kind in VariableKind::ALL {
            for variable in kind.members() {
                assert_eq!(variable.kind(), kind, "{variable}");
            }
        }
    }

    #[test]
    fn parse_rejects_unclassified_columns() {
        assert_eq!(
            "latitude".parse::<Variable>(),
            Err(ModelError::UnknownVariable("latitude".to_string()))
        );
        assert_eq!("price_mxn".parse::<Variable>(), Ok(Variable::PriceMxn));
    }
}
