//! Institute for Statistics: standing figures and per-year reports.

use api::models::{BrandCount, YearlyCounts};
use api::Service;
use dioxus::prelude::*;
use ui::actions;
use ui::components::Heading;
use ui::forms::{Form, FormField, FormValues};
use ui::views::PingButton;
use ui::workflow::ActionState;
use ui::{push_error, use_api, use_toasts};

use super::section::{loaded, ListSection};

#[component]
pub fn Statistics() -> Element {
    let client = use_api();

    let by_year = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.statistics().vehicle_statistics_by_year().await }
        }
    });
    let traffic = use_resource(move || {
        let client = client.clone();
        async move { client.statistics().traffic_statistics().await }
    });

    rsx! {
        Heading { title: "Institute for Statistics", subtitle: "Vehicle and traffic figures" }
        PingButton { service: Service::Statistics }

        section {
            class: "page-section",
            h2 { "Registered vehicles by year" }
            {match &*by_year.read() {
                None => rsx! { p { class: "loading", "Loading..." } },
                Some(Err(e)) => rsx! { p { class: "inline-error", "{e}" } },
                Some(Ok(counts)) => rsx! {
                    StatTable { label: "Year", rows: count_rows(counts) }
                },
            }}
        }

        ListSection {
            title: "Traffic statistics",
            cards: loaded(traffic.read().as_ref()),
            empty_heading: "There are no traffic statistics",
        }

        for query in YearQuery::ALL {
            YearReport { key: "{query.title()}", query }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum YearQuery {
    RegisteredVehicles,
    MostPopularBrands,
    ViolationsReport,
}

impl YearQuery {
    const ALL: [YearQuery; 3] = [
        YearQuery::RegisteredVehicles,
        YearQuery::MostPopularBrands,
        YearQuery::ViolationsReport,
    ];

    fn title(self) -> &'static str {
        match self {
            YearQuery::RegisteredVehicles => "Registered vehicles",
            YearQuery::MostPopularBrands => "Most popular brands",
            YearQuery::ViolationsReport => "Traffic violations report",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum YearAnswer {
    Count(u64),
    Brands(Vec<BrandCount>),
    Report(YearlyCounts),
}

fn count_rows(counts: &YearlyCounts) -> Vec<(String, String)> {
    counts.iter().map(|(label, count)| (label.clone(), count.to_string())).collect()
}

/// A year form and, once answered, the figures for that year.
#[component]
fn YearReport(query: YearQuery) -> Element {
    let client = use_api();
    let mut toasts = use_toasts();
    let mut state = use_signal(ActionState::default);
    let mut answer = use_signal(|| None::<(String, YearAnswer)>);

    let submit = move |values: FormValues| {
        let client = client.clone();
        if !state.write().try_begin() {
            return;
        }
        spawn(async move {
            let year = values.text("year").unwrap_or_default().trim().to_string();
            let result = match query {
                YearQuery::RegisteredVehicles => actions::registered_vehicles_for_year(&client, &values)
                    .await
                    .map(YearAnswer::Count),
                YearQuery::MostPopularBrands => actions::most_popular_brands_for_year(&client, &values)
                    .await
                    .map(YearAnswer::Brands),
                YearQuery::ViolationsReport => actions::traffic_violations_report_for_year(&client, &values)
                    .await
                    .map(YearAnswer::Report),
            };
            match result {
                Ok(found) => {
                    answer.set(Some((year, found)));
                    state.set(ActionState::Succeeded);
                }
                Err(e) => {
                    let message = e.user_message();
                    push_error(&mut toasts, &message);
                    state.set(ActionState::Failed(message));
                }
            }
        });
    };

    rsx! {
        section {
            class: "page-section",
            Form {
                heading: query.title(),
                fields: vec![FormField::text("year", "Year")],
                submit_label: "Show",
                busy: state.read().is_loading(),
                on_submit: submit,
            }
            {match answer() {
                None => rsx! {},
                Some((year, YearAnswer::Count(count))) => rsx! {
                    p { class: "stat-figure", "{count} vehicles registered in {year}" }
                },
                Some((_, YearAnswer::Brands(brands))) => rsx! {
                    StatTable {
                        label: "Brand",
                        rows: brands.into_iter().map(|b| (b.brand, b.count.to_string())).collect::<Vec<_>>(),
                    }
                },
                Some((_, YearAnswer::Report(report))) => rsx! {
                    StatTable { label: "Violation", rows: count_rows(&report) }
                },
            }}
        }
    }
}

#[component]
fn StatTable(label: String, rows: Vec<(String, String)>) -> Element {
    if rows.is_empty() {
        return rsx! {
            p { class: "empty-state", "No data for this period" }
        };
    }

    rsx! {
        table {
            class: "stat-table",
            thead {
                tr {
                    th { "{label}" }
                    th { "Count" }
                }
            }
            tbody {
                for (key, count) in rows {
                    tr {
                        key: "{key}",
                        td { "{key}" }
                        td { "{count}" }
                    }
                }
            }
        }
    }
}
