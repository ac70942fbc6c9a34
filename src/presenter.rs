use ecp_core::{entities::*, gateways::present::PresentationGateway};

/// Renders resolved locations and search results on standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPresenter;

impl TerminalPresenter {
    pub fn location_resolved(&self, resolved: &ResolvedLocation) {
        match resolved.source {
            LocationSource::Gps => {
                println!("Device position: {}", resolved.pos);
            }
            LocationSource::IpLookup => {
                let city = resolved.city.as_deref().unwrap_or("unknown city");
                println!(
                    "GPS unavailable. Using the approximate IP location near {} ({})",
                    city, resolved.pos
                );
            }
            LocationSource::Geocode => match &resolved.city {
                Some(name) => println!("Address resolved to {} ({})", resolved.pos, name),
                None => println!("Address resolved to {}", resolved.pos),
            },
        }
    }
}

impl PresentationGateway for TerminalPresenter {
    fn point_filtered(&self, result: &PointFilterResult) {
        let PointFilterResult {
            point,
            distance,
            within_radius,
        } = result;
        // Points out of reach stay invisible, like on the map view.
        if !within_radius {
            return;
        }
        match distance {
            Some(d) => println!("  {} ({}) - {:.2} km", point.label, point.kind.label(), d.to_km()),
            None => println!("  {} ({})", point.label, point.kind.label()),
        }
        if let Some(address) = &point.address {
            println!("      {address}");
        }
    }

    fn kind_summarized(&self, summary: &KindSummary) {
        let KindSummary {
            kind,
            count,
            radius,
        } = summary;
        if *count > 0 {
            println!(
                "{}: {} point(s) within {} km",
                kind.label(),
                count,
                radius.to_km()
            );
        } else {
            println!("{}: no points within {} km", kind.label(), radius.to_km());
        }
        println!("    {}", kind.hint());
    }
}
