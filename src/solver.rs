//! Kiosk route solver: nearest-neighbor construction followed by 2-opt.

use tracing::{debug, info, trace, warn};

use crate::haversine::EARTH_RADIUS_KM;
use crate::itinerary::Itinerary;
use crate::kiosk::KioskSet;
use crate::matrix::{DistanceMatrix, build_distance_matrix};
use crate::route::Route;
use crate::{Result, RouteError};

/// Index every constructed tour starts and ends at.
pub const START_INDEX: usize = 0;

#[derive(Debug, Clone)]
pub struct RouteOptions {
    /// Sphere radius used for great-circle distances.
    pub earth_radius_km: f64,
    /// Reject non-finite or out-of-range coordinates before building the matrix.
    pub validate_coordinates: bool,
    /// Stop 2-opt after this many accepted moves. `None` runs to a local optimum.
    pub max_improvements: Option<usize>,
    /// Label printed after distances in itineraries.
    pub distance_unit: String,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            earth_radius_km: EARTH_RADIUS_KM,
            validate_coordinates: true,
            max_improvements: None,
            distance_unit: "km".to_string(),
        }
    }
}

/// Output of the nearest-neighbor constructor.
#[derive(Debug, Clone)]
pub struct GreedyTour {
    pub route: Route,
    pub total_cost: f64,
    /// Cost of each edge in visiting order, closing edge last.
    pub step_costs: Vec<f64>,
}

/// Output of the 2-opt improver.
#[derive(Debug, Clone)]
pub struct ImprovedTour {
    pub best_route: Route,
    pub best_cost: f64,
    /// Best route held before the last accepted move. Equals the input route
    /// when no move was accepted.
    pub alternate_route: Route,
    pub alternate_cost: f64,
    /// Number of accepted moves.
    pub improvements: usize,
}

#[derive(Debug, Clone)]
pub struct RoutePlan {
    pub greedy: GreedyTour,
    pub improved: ImprovedTour,
}

impl RoutePlan {
    /// Itineraries for the best and alternate routes, in that order.
    pub fn itineraries(&self, kiosks: &KioskSet, options: &RouteOptions) -> Result<(Itinerary, Itinerary)> {
        let names = kiosks.names();
        let best = Itinerary::new(&self.improved.best_route, self.improved.best_cost, &names)?
            .with_unit(&options.distance_unit);
        let alternate = Itinerary::new(&self.improved.alternate_route, self.improved.alternate_cost, &names)?
            .with_unit(&options.distance_unit);
        Ok((best, alternate))
    }
}

/// Runs the full pipeline for a kiosk set.
pub fn plan(kiosks: &KioskSet, options: &RouteOptions) -> Result<RoutePlan> {
    let matrix = build_distance_matrix(kiosks, options)?;

    let greedy = greedy_route(&matrix)?;
    info!(cost = greedy.total_cost, stops = greedy.route.len(), "built greedy route");

    let improved = improve_route(&greedy.route, &matrix, options)?;
    info!(
        cost = improved.best_cost,
        alternate_cost = improved.alternate_cost,
        improvements = improved.improvements,
        "improved route"
    );

    Ok(RoutePlan { greedy, improved })
}

/// Builds a closed tour by always stepping to the nearest unvisited point.
///
/// Starts at index 0. Ties go to the lowest index.
pub fn greedy_route(matrix: &DistanceMatrix) -> Result<GreedyTour> {
    let n = matrix.len();
    if n == 0 {
        return Err(RouteError::EmptyInput);
    }

    let mut visited = vec![false; n];
    visited[START_INDEX] = true;

    let mut stops = Vec::with_capacity(n + 1);
    stops.push(START_INDEX);
    let mut step_costs = Vec::with_capacity(n);
    let mut current = START_INDEX;

    for _ in 1..n {
        let (next, distance) = next_unvisited(matrix.row(current), &visited, current)?;
        trace!(from = current, to = next, distance, "greedy step");

        visited[next] = true;
        stops.push(next);
        step_costs.push(distance);
        current = next;
    }

    step_costs.push(matrix.get(current, START_INDEX));
    stops.push(START_INDEX);

    let route = Route::new(stops);
    if !route.is_tour_of(n) {
        return Err(RouteError::invariant(format!(
            "greedy construction produced {:?} for {n} points",
            route.stops()
        )));
    }

    let total_cost = step_costs.iter().sum();
    Ok(GreedyTour {
        route,
        total_cost,
        step_costs,
    })
}

/// Nearest unvisited index in `row`, scanning indices in (distance, index) order.
fn next_unvisited(row: &[f64], visited: &[bool], from: usize) -> Result<(usize, f64)> {
    let mut order: Vec<usize> = (0..row.len()).collect();
    order.sort_by(|&a, &b| row[a].total_cmp(&row[b]).then(a.cmp(&b)));

    order
        .into_iter()
        .find(|&candidate| !visited[candidate])
        .map(|candidate| (candidate, row[candidate]))
        .ok_or(RouteError::NoUnvisitedNode { from })
}

/// Improves a closed route with first-improvement 2-opt.
///
/// Reverses `route[i..=k]` for `1 <= i < k < len - 1`, keeping both end
/// stops fixed. The first strictly cheaper candidate is accepted and the
/// scan restarts. Stops at a local optimum or after
/// `options.max_improvements` accepted moves.
pub fn improve_route(route: &Route, matrix: &DistanceMatrix, options: &RouteOptions) -> Result<ImprovedTour> {
    route.check_bounds(matrix.len())?;

    let mut best_route = route.clone();
    let mut best_cost = route.cost(matrix);
    let mut alternate_route = route.clone();
    let mut alternate_cost = best_cost;
    let mut improvements = 0;

    let len = route.len();
    'search: loop {
        if options.max_improvements.is_some_and(|limit| improvements >= limit) {
            warn!(improvements, "2-opt stopped at improvement limit");
            break;
        }

        for i in 1..len.saturating_sub(1) {
            for k in i + 1..len - 1 {
                let candidate = best_route.reverse_segment(i, k)?;
                let candidate_cost = candidate.cost(matrix);

                if candidate_cost < best_cost {
                    debug!(i, k, from = best_cost, to = candidate_cost, "accepted 2-opt move");
                    alternate_route = std::mem::replace(&mut best_route, candidate);
                    alternate_cost = std::mem::replace(&mut best_cost, candidate_cost);
                    improvements += 1;
                    continue 'search;
                }
            }
        }

        break;
    }

    if best_route.len() != len {
        return Err(RouteError::invariant(format!(
            "2-opt changed route length from {len} to {}",
            best_route.len()
        )));
    }

    Ok(ImprovedTour {
        best_route,
        best_cost,
        alternate_route,
        alternate_cost,
        improvements,
    })
}
