use anyhow::Result;
use chrono::NaiveDateTime;

use crate::accounting::{classify, IntervalClass, WeeklyTotals};
use crate::config::Config;
use crate::history::{happy_color, HistoryBook, HistoryError};
use crate::model::booking::Booking;
use crate::model::family::Family;
use crate::period::ReportingWindow;
use crate::repository::{BookingRepository, DonationRepository};
use crate::service::donation_service::DonationService;
use crate::service::dto::FamilyData;

#[derive(Debug, Clone, PartialEq)]
pub struct HoursSummary {
    pub totals: WeeklyTotals,
    pub history: HistoryBook,
}

/// Splits already-fetched bookings into this week's totals and per-parent
/// history, then styles and gap-fills each parent's series.
///
/// Every booking's `user_id` must belong to one of `family`'s parents.
pub fn summarize_bookings(
    family: &Family,
    bookings: &[Booking],
    today: NaiveDateTime,
    week_start: NaiveDateTime,
    config: &Config,
) -> Result<HoursSummary, HistoryError> {
    let mut history = HistoryBook::new();
    for parent in &family.parents {
        history.register(parent.user_id);
    }

    let mut totals = WeeklyTotals::default();
    for booking in bookings {
        let class = classify(booking, today, week_start);
        if class == IntervalClass::Historical {
            history.record(booking)?;
        } else {
            totals.add(class, booking.weighted_hours());
        }
    }

    for parent in &family.parents {
        let series = history.series_mut(parent.user_id)?;
        series.configure_as_historical_hours(&parent.first_name, happy_color(), false, 0.0);
        series.span_gaps(config.gap_threshold_days, config.gap_metric);
    }

    Ok(HoursSummary {
        totals: totals.truncated(),
        history,
    })
}

pub struct FamilyDataUseCase<'a, B: BookingRepository, D: DonationRepository> {
    booking_repo: &'a B,
    donation_service: &'a DonationService<D>,
    config: &'a Config,
}

impl<'a, B: BookingRepository, D: DonationRepository> FamilyDataUseCase<'a, B, D> {
    pub fn new(booking_repo: &'a B, donation_service: &'a DonationService<D>, config: &'a Config) -> Self {
        Self {
            booking_repo,
            donation_service,
            config,
        }
    }

    /// Builds the dashboard aggregate for `family` as seen at `today`.
    /// Repository failures abort the build and are returned as-is.
    pub fn build(&self, family: &Family, today: NaiveDateTime) -> Result<FamilyData> {
        let window = ReportingWindow::resolve(today, self.config.period_length_months);
        log::debug!(
            "family {}: week {} - {}, history from {}",
            family.id,
            window.week_start,
            window.week_end,
            window.history_start
        );

        let bookings = self
            .booking_repo
            .list_for_family(family.id, window.history_start, window.history_end)
            .inspect_err(|e| log::warn!("Error getting hours data for family {}: {}", family.id, e))?;

        let summary = summarize_bookings(family, &bookings, today, window.week_start, self.config)?;

        let net_donations = self
            .donation_service
            .net_for_family(family.id, window.week_start, window.week_end)?;

        Ok(FamilyData {
            family_id: family.id,
            family_name: family.name.clone(),
            start_moment: window.week_start,
            end_moment: window.week_end,
            hours_goal: self.config.goal.goal_for(family.children),
            hours_booked: summary.totals.booked,
            hours_done: summary.totals.done,
            net_donations,
            history: summary.history,
            start_of_period: window.history_start,
            end_of_period: window.history_end,
        })
    }
}
