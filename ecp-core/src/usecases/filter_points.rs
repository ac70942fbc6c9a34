use super::prelude::*;

/// Classifies candidate points by their distance from a reference
/// location.
///
/// Results keep the input order. Points without usable geodata have
/// an unknown distance and never fall within the radius. The radius
/// boundary itself is inclusive.
pub fn filter_points(
    reference: MapPoint,
    points: Vec<CollectionPoint>,
    radius: Distance,
) -> Result<Vec<PointFilterResult>> {
    if !radius.is_valid() {
        return Err(Error::Radius);
    }
    log::debug!(
        "Filtering {} points within {} km of {}",
        points.len(),
        radius.to_km(),
        reference
    );
    Ok(points
        .into_iter()
        .map(|point| {
            let distance = if point.has_geodata() {
                MapPoint::distance(reference, point.pos)
            } else {
                None
            };
            let within_radius = distance.map_or(false, |d| d <= radius);
            PointFilterResult {
                point,
                distance,
                within_radius,
            }
        })
        .collect())
}

/// Tallies the points within the radius for each kind of waste.
///
/// Every kind is reported, also those without a single point nearby.
pub fn summarize_by_kind(results: &[PointFilterResult], radius: Distance) -> Vec<KindSummary> {
    WasteKind::ALL
        .iter()
        .map(|&kind| KindSummary {
            kind,
            count: results
                .iter()
                .filter(|res| res.within_radius && res.point.kind == kind)
                .count(),
            radius,
        })
        .collect()
}
