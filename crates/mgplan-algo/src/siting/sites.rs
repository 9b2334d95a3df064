//! Candidate site generation.
//!
//! Candidate microgrid locations are sampled uniformly inside the bounding
//! box of the known power plants, from a fixed seed so runs are
//! reproducible.

use rand::rngs::StdRng;
use rand::{seq::index::sample, Rng, SeedableRng};

use mgplan_core::{CandidateSite, GeoBounds};

use super::SitingError;

/// Oversampling factor for the coordinate pools.
const OVERSAMPLE: usize = 4;

/// Generate `count` candidate sites inside `bounds`, deterministically from
/// `seed`.
///
/// The sampling scheme oversamples `4 × count` latitudes and longitudes
/// independently within their ranges, draws `count` values from each pool
/// without replacement, and pairs them positionally. The marginal
/// distributions are uniform in-box; the lat/lon pairing is an artifact of
/// the draw order rather than joint 2-D sampling. The scheme is kept as-is
/// so seeded runs stay comparable with previously published selections.
///
/// Fails when `count` is zero or when the bounding box has zero extent on
/// either axis.
pub fn generate_candidate_sites(
    bounds: &GeoBounds,
    count: usize,
    seed: u64,
) -> Result<Vec<CandidateSite>, SitingError> {
    if count == 0 {
        return Err(SitingError::InvalidParameter(
            "candidate site count must be > 0".into(),
        ));
    }
    if bounds.lat_min >= bounds.lat_max {
        return Err(SitingError::DegenerateBounds("latitude"));
    }
    if bounds.lon_min >= bounds.lon_max {
        return Err(SitingError::DegenerateBounds("longitude"));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let pool_size = OVERSAMPLE * count;

    let lat_pool: Vec<f64> = (0..pool_size)
        .map(|_| rng.gen_range(bounds.lat_min..bounds.lat_max))
        .collect();
    let lon_pool: Vec<f64> = (0..pool_size)
        .map(|_| rng.gen_range(bounds.lon_min..bounds.lon_max))
        .collect();

    let lat_picks = sample(&mut rng, pool_size, count);
    let lon_picks = sample(&mut rng, pool_size, count);

    let sites = lat_picks
        .into_iter()
        .zip(lon_picks.into_iter())
        .map(|(i, j)| CandidateSite::new(lat_pool[i], lon_pool[j]))
        .collect();

    Ok(sites)
}
