use coophours_core::{Config, Family, FamilyData};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct FamilyRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Family")]
    name: String,
    #[tabled(rename = "Kids")]
    children: u32,
    #[tabled(rename = "Parents")]
    parents: String,
    #[tabled(rename = "Goal (h)")]
    goal: String,
}

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Goal (h)")]
    goal: String,
    #[tabled(rename = "Booked (h)")]
    booked: String,
    #[tabled(rename = "Done (h)")]
    done: String,
    #[tabled(rename = "Donated (h)")]
    donated: String,
    #[tabled(rename = "Outstanding (h)")]
    outstanding: String,
}

#[derive(Tabled, Debug, PartialEq)]
struct HistoryRow {
    #[tabled(rename = "Parent")]
    parent: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Hours")]
    hours: String,
}

fn styled(mut table: Table) -> Table {
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    table
}

pub fn print_families(families: &[Family], config: &Config) {
    let rows: Vec<FamilyRow> = families
        .iter()
        .map(|f| FamilyRow {
            id: f.id,
            name: f.name.clone(),
            children: f.children,
            parents: f
                .parents
                .iter()
                .map(|p| format!("{} ({})", p.first_name, p.user_id))
                .collect::<Vec<_>>()
                .join(", "),
            goal: format!("{:.2}", config.goal.goal_for(f.children)),
        })
        .collect();
    println!("{}", styled(Table::new(rows)));
}

pub fn print_dashboard(data: &FamilyData) {
    println!(
        "\n\x1b[1;36m{}\x1b[0m  week {} - {}",
        data.family_name,
        data.start_moment.format("%Y-%m-%d"),
        data.end_moment.format("%Y-%m-%d"),
    );

    let summary = SummaryRow {
        goal: format!("{:.2}", data.hours_goal),
        booked: format!("{:.2}", data.hours_booked),
        done: format!("{:.2}", data.hours_done),
        donated: format!("{:+.2}", data.net_donations),
        outstanding: format!("{:.2}", data.hours_outstanding()),
    };
    println!("{}", styled(Table::new(vec![summary])));

    println!(
        "\nHistory {} - {}",
        data.start_of_period.format("%Y-%m-%d"),
        data.end_of_period.format("%Y-%m-%d"),
    );

    let rows = history_rows(data);

    if rows.is_empty() {
        println!("No bookings in this period.");
    } else {
        println!("{}", styled(Table::new(rows)));
    }
}

fn history_rows(data: &FamilyData) -> Vec<HistoryRow> {
    let mut rows = Vec::new();
    for (_, series) in data.history.iter() {
        for (i, point) in series.recorded_points().enumerate() {
            rows.push(HistoryRow {
                parent: if i == 0 { format!("{}\nTotal: {:.2}h", series.label, series.total()) } else { String::new() },
                date: point.x.format("%Y-%m-%d (%a)").to_string(),
                hours: format!("{:.2}", point.y),
            });
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use coophours_core::{Booking, GapMetric, HistoryBook};

    fn at(m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap().and_hms_opt(h, 0, 0).unwrap()
    }

    fn dashboard(history: HistoryBook) -> FamilyData {
        FamilyData {
            family_id: 1,
            family_name: "Okafor".to_string(),
            start_moment: at(3, 4, 0),
            end_moment: at(3, 10, 23),
            hours_goal: 2.5,
            hours_booked: 0.0,
            hours_done: 0.0,
            net_donations: 0.0,
            history,
            start_of_period: at(1, 1, 0),
            end_of_period: at(3, 10, 23),
        }
    }

    #[test]
    fn test_history_rows_keep_zero_hour_bookings_and_skip_fillers() {
        let mut history = HistoryBook::new();
        history.register(10);
        history.record(&Booking::new(1, 10, at(2, 1, 9), at(2, 1, 11))).unwrap();
        // cancelled block: zero weight but still a booking
        history
            .record(&Booking::new(1, 10, at(2, 2, 9), at(2, 2, 11)).with_modifier(0.0))
            .unwrap();
        history.record(&Booking::new(1, 10, at(2, 20, 9), at(2, 20, 10))).unwrap();
        let series = history.series_mut(10).unwrap();
        series.configure_as_historical_hours("Ada", "#336699".to_string(), false, 0.0);
        series.span_gaps(5, GapMetric::ElapsedDays);
        assert_eq!(series.data.len(), 4);

        let rows = history_rows(&dashboard(history));

        let dates: Vec<&str> = rows.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-02-01 (Thu)", "2024-02-02 (Fri)", "2024-02-20 (Tue)"]);
        assert_eq!(rows[1].hours, "0.00");
        assert_eq!(rows[0].parent, "Ada\nTotal: 3.00h");
        assert!(rows[1].parent.is_empty());
    }

    #[test]
    fn test_history_rows_empty_without_bookings() {
        let mut history = HistoryBook::new();
        history.register(10);
        assert!(history_rows(&dashboard(history)).is_empty());
    }
}
