use super::*;

/// Classifies the point catalog around a reference location and drives
/// the presenter with the outcome, one point and one kind at a time.
pub fn nearby_collection_points<R, P>(
    repo: &R,
    presenter: &P,
    reference: MapPoint,
    radius: Distance,
    kind: Option<WasteKind>,
) -> Result<Vec<KindSummary>>
where
    R: CollectionPointRepo,
    P: PresentationGateway,
{
    let points = match kind {
        Some(kind) => repo.collection_points_by_kind(kind)?,
        None => repo.all_collection_points()?,
    };
    let results = usecases::filter_points(reference, points, radius)?;
    let summaries = usecases::summarize_by_kind(&results, radius);
    let within = results.iter().filter(|result| result.within_radius).count();
    info!(
        "{within} of {} collection point(s) within {:.1} km",
        results.len(),
        radius.to_km()
    );
    for result in &results {
        presenter.point_filtered(result);
    }
    for summary in &summaries {
        presenter.kind_summarized(summary);
    }
    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::*;
    use ecp_entities::builders::Builder;

    fn catalog() -> Vec<CollectionPoint> {
        vec![
            CollectionPoint::build()
                .label("EcoPonto Centro")
                .kind(WasteKind::Glass)
                .lat_lng_deg(-7.1195, -34.845)
                .finish(),
            CollectionPoint::build()
                .label("EcoPonto Manaíra")
                .kind(WasteKind::Batteries)
                .lat_lng_deg(-7.1034, -34.826)
                .finish(),
            CollectionPoint::build()
                .label("Sem geodata")
                .kind(WasteKind::Glass)
                .lat_lng_deg(0.0, 0.0)
                .finish(),
        ]
    }

    #[test]
    fn presents_points_before_summaries() {
        let repo = DummyRepo::from(catalog());
        let presenter = RecordingPresenter::default();
        let reference = MapPoint::from_lat_lng_deg(-7.1195, -34.845);
        let summaries = nearby_collection_points(
            &repo,
            &presenter,
            reference,
            Distance::from_km(5.0),
            None,
        )
        .unwrap();

        let events = presenter.events.borrow();
        assert_eq!(3 + WasteKind::ALL.len(), events.len());
        assert!(events[..3]
            .iter()
            .all(|event| matches!(event, PresentedEvent::Point(_))));
        assert!(events[3..]
            .iter()
            .all(|event| matches!(event, PresentedEvent::Kind(_))));
        assert_eq!(WasteKind::ALL.len(), summaries.len());
    }

    #[test]
    fn counts_only_points_within_the_radius() {
        let repo = DummyRepo::from(catalog());
        let presenter = RecordingPresenter::default();
        let reference = MapPoint::from_lat_lng_deg(-7.1195, -34.845);
        // Manaíra is roughly 2.8 km away from the reference.
        let summaries = nearby_collection_points(
            &repo,
            &presenter,
            reference,
            Distance::from_km(1.0),
            None,
        )
        .unwrap();

        let glass = summaries
            .iter()
            .find(|summary| summary.kind == WasteKind::Glass)
            .unwrap();
        let batteries = summaries
            .iter()
            .find(|summary| summary.kind == WasteKind::Batteries)
            .unwrap();
        assert_eq!(1, glass.count);
        assert_eq!(0, batteries.count);
    }

    #[test]
    fn restricts_the_catalog_to_one_kind() {
        let repo = DummyRepo::from(catalog());
        let presenter = RecordingPresenter::default();
        let reference = MapPoint::from_lat_lng_deg(-7.1195, -34.845);
        nearby_collection_points(
            &repo,
            &presenter,
            reference,
            Distance::from_km(5.0),
            Some(WasteKind::Batteries),
        )
        .unwrap();

        let events = presenter.events.borrow();
        let points: Vec<_> = events
            .iter()
            .filter_map(|event| match event {
                PresentedEvent::Point(label) => Some(label.as_str()),
                PresentedEvent::Kind(_) => None,
            })
            .collect();
        assert_eq!(vec!["EcoPonto Manaíra"], points);
    }

    #[test]
    fn rejects_an_invalid_radius() {
        let repo = DummyRepo::from(catalog());
        let presenter = RecordingPresenter::default();
        let reference = MapPoint::from_lat_lng_deg(-7.1195, -34.845);
        let err = nearby_collection_points(
            &repo,
            &presenter,
            reference,
            Distance::from_km(-3.0),
            None,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            crate::error::AppError::Business(crate::error::BError::Parameter(
                usecases::Error::Radius
            ))
        ));
        assert!(presenter.events.borrow().is_empty());
    }
}
