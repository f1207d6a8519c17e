//! Construction and solution of the land-rotation allocation problem.
//!
//! The problem decides how much of each candidate crop to plant in each start
//! month of the year. Land is a renewable, time-shared resource: a planting
//! occupies the plot for its whole growing window, which may wrap around the
//! year end, and the plantings active in any calendar month must jointly fit
//! within the farm's area. Planted quantities are additionally capped by
//! market demand through a per-crop binary activation flag.
use super::economics::EconomicsMap;
use crate::crop::CropID;
use crate::demand::DemandMap;
use crate::month::Month;
use crate::units::{Area, Mass, Money};
use highs::{HighsModelStatus, RowProblem as Problem, Sense};
use indexmap::IndexMap;
use log::{debug, info};

/// A decision variable in the optimisation
///
/// Note that this type does **not** include the value of the variable; it just
/// refers to a particular column of the problem.
type Variable = highs::Col;

/// The outcome of an allocation attempt, surfaced to callers as data.
///
/// A status other than `Optimal` is a valid terminal outcome meaning "no
/// usable recommendation", not a fault; there is no retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum SolveStatus {
    /// The solver proved an optimal allocation
    #[strum(serialize = "optimal")]
    Optimal,
    /// The constraints admit no allocation at all
    #[strum(serialize = "infeasible")]
    Infeasible,
    /// The objective can grow without bound
    #[strum(serialize = "unbounded")]
    Unbounded,
    /// The solver did not attempt the problem
    #[strum(serialize = "not solved")]
    NotSolved,
    /// The solver stopped without a usable verdict
    #[strum(serialize = "undefined")]
    Undefined,
    /// No candidate crops were available to optimise over
    #[strum(serialize = "no solution")]
    NoSolution,
}

impl From<HighsModelStatus> for SolveStatus {
    fn from(status: HighsModelStatus) -> Self {
        match status {
            HighsModelStatus::Optimal => Self::Optimal,
            HighsModelStatus::Infeasible => Self::Infeasible,
            HighsModelStatus::Unbounded | HighsModelStatus::UnboundedOrInfeasible => {
                Self::Unbounded
            }
            HighsModelStatus::NotSet => Self::NotSolved,
            _ => Self::Undefined,
        }
    }
}

/// A map for easy lookup of quantity variables in the problem.
///
/// The entries are ordered (see [`IndexMap`]).
///
/// We use this data structure for two things:
///
/// 1. In order to define constraints for the optimisation
/// 2. To keep track of the (crop, start month) pair each variable corresponds
///    to, for when we are reading the results of the optimisation.
#[derive(Default)]
struct VariableMap(IndexMap<(CropID, Month), Variable>);

impl VariableMap {
    /// Get the [`Variable`] for the given crop and start month
    fn get(&self, crop_id: &CropID, start_month: Month) -> Variable {
        *self
            .0
            .get(&(crop_id.clone(), start_month))
            .expect("No variable found for given params")
    }
}

/// The solution to the allocation problem
pub struct Allocation {
    /// Solved planted quantity in kg for every (crop, start month) pair
    pub quantities: Vec<(CropID, Month, f64)>,
    /// The solver's verdict
    pub status: SolveStatus,
    /// The objective value: total annual profit
    pub objective: Money,
}

impl Allocation {
    /// An allocation with no plantings and the given status
    fn empty(status: SolveStatus) -> Self {
        Self {
            quantities: Vec::new(),
            status,
            objective: Money(0.0),
        }
    }
}

/// Build and solve the land-rotation allocation problem.
///
/// # Arguments
///
/// * `economics` - Derived economic parameters for each candidate crop
/// * `demand` - Aggregated demand per product
/// * `land_area` - The farm's total area
///
/// # Returns
///
/// The solved quantities together with the solver status and objective value.
/// One solve attempt is made; a non-optimal status is returned as data.
pub fn solve_allocation(
    economics: &EconomicsMap,
    demand: &DemandMap,
    land_area: Area,
) -> Allocation {
    if economics.is_empty() {
        return Allocation::empty(SolveStatus::NoSolution);
    }

    // Set up problem
    let mut problem = Problem::default();
    let variables = add_quantity_variables(&mut problem, economics);
    let activations = add_activation_variables(&mut problem, economics);

    // Add constraints
    add_demand_cap_constraints(&mut problem, &variables, &activations, economics, demand);
    add_land_occupancy_constraints(&mut problem, &variables, economics, land_area);

    debug!(
        "Allocation problem has {} quantity and {} activation variables",
        variables.0.len(),
        activations.len()
    );

    // Solve problem
    let mut model = problem.optimise(Sense::Maximise);

    // Solver progress goes through our logger, not the solver's own output
    model.set_option("output_flag", false);

    let solved = model.solve();
    let status = SolveStatus::from(solved.status());
    if status != SolveStatus::Optimal {
        info!("Solver finished without an optimum: {status}");
        return Allocation::empty(status);
    }

    let solution = solved.get_solution();

    // Quantity columns were added to the problem first, in map order, so the
    // first n column values line up with the variable map entries
    let mut objective = Money(0.0);
    let mut quantities = Vec::with_capacity(variables.0.len());
    for ((crop_id, start_month), quantity) in variables.0.keys().zip(solution.columns()) {
        objective = objective + economics[crop_id].profit_per_kg * Mass(*quantity);
        quantities.push((crop_id.clone(), *start_month, *quantity));
    }

    Allocation {
        quantities,
        status,
        objective,
    }
}

/// Add a non-negative planted-quantity variable for every (crop, start month)
/// pair, with the crop's profit per kg as its objective coefficient.
fn add_quantity_variables(problem: &mut Problem, economics: &EconomicsMap) -> VariableMap {
    let mut variables = VariableMap::default();

    for (crop_id, crop) in economics.iter() {
        for start_month in Month::iter_all() {
            let var = problem.add_column(crop.profit_per_kg.value(), 0.0..);

            let existing = variables
                .0
                .insert((crop_id.clone(), start_month), var)
                .is_some();
            assert!(!existing, "Duplicate entry for var");
        }
    }

    variables
}

/// Add a binary activation variable for every crop
fn add_activation_variables(
    problem: &mut Problem,
    economics: &EconomicsMap,
) -> IndexMap<CropID, Variable> {
    economics
        .keys()
        .map(|crop_id| (crop_id.clone(), problem.add_integer_column(0.0, 0.0..=1.0)))
        .collect()
}

/// Add the demand cap constraint for each crop.
///
/// The total quantity planted across all start months must not exceed the
/// crop's total demand times its activation flag. The demand itself bounds
/// the coupling, so no separate big-M constant is needed: a zero flag forces
/// all of the crop's quantities to zero.
fn add_demand_cap_constraints(
    problem: &mut Problem,
    variables: &VariableMap,
    activations: &IndexMap<CropID, Variable>,
    economics: &EconomicsMap,
    demand: &DemandMap,
) {
    for crop_id in economics.keys() {
        let total_demand = demand
            .get(crop_id)
            .map_or(0.0, |summary| summary.total_quantity.value());

        let mut terms: Vec<_> = Month::iter_all()
            .map(|start_month| (variables.get(crop_id, start_month), 1.0))
            .collect();
        terms.push((activations[crop_id], -total_demand));

        problem.add_row(..=0.0, terms);
    }
}

/// Add the land occupancy constraint for each calendar month.
///
/// Every planting whose growing window covers the month claims
/// `quantity / yield` square metres, and the claims must jointly fit within
/// the farm's area. Growing windows wrap around the year end, so a crop
/// planted in month 11 with a four-month occupancy also claims land in
/// months 12, 1 and 2.
fn add_land_occupancy_constraints(
    problem: &mut Problem,
    variables: &VariableMap,
    economics: &EconomicsMap,
    land_area: Area,
) {
    let mut terms = Vec::new();
    for month in Month::iter_all() {
        for (crop_id, crop) in economics.iter() {
            let land_per_kg = 1.0 / crop.land_yield().value();

            for start_month in Month::iter_all() {
                let occupies_month = start_month
                    .occupied_window(crop.occupancy_months)
                    .any(|occupied| occupied == month);
                if occupies_month {
                    terms.push((variables.get(crop_id, start_month), land_per_kg));
                }
            }
        }

        problem.add_row(..=land_area.value(), terms.drain(0..));
    }
}
