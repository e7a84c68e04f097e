//! The daily and monthly summary pages.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error, endpoints,
    html::{
        ECHARTS_SCRIPT, HeadElement, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        amount_class, base, format_amount, link,
    },
    navigation::NavBar,
    summary::{
        aggregation::{PeriodTotal, aggregate_by_day, aggregate_by_month},
        charts::{ChartStyle, SummaryChart, chart_script, chart_view, totals_chart},
    },
};

/// The state needed for the summary pages.
#[derive(Debug, Clone)]
pub struct SummaryState {
    /// The database connection for reading transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for SummaryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// How transactions are grouped on a summary page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grouping {
    Day,
    Month,
}

impl Grouping {
    fn endpoint(self) -> &'static str {
        match self {
            Grouping::Day => endpoints::DAILY_SUMMARY_VIEW,
            Grouping::Month => endpoints::MONTHLY_SUMMARY_VIEW,
        }
    }

    fn chart_id(self) -> &'static str {
        match self {
            Grouping::Day => "daily-summary-chart",
            Grouping::Month => "monthly-summary-chart",
        }
    }

    fn style(self) -> ChartStyle {
        match self {
            Grouping::Day => ChartStyle {
                title: "Daily Expenses",
                x_axis_name: "Date",
                bar_color: "red",
            },
            Grouping::Month => ChartStyle {
                title: "Monthly Expenses",
                x_axis_name: "Month",
                bar_color: "blue",
            },
        }
    }

    fn aggregate(self, connection: &Connection) -> Result<Vec<PeriodTotal>, Error> {
        match self {
            Grouping::Day => aggregate_by_day(connection),
            Grouping::Month => aggregate_by_month(connection),
        }
    }
}

/// Display a bar chart of the total amount on each day.
pub async fn get_daily_summary_page(State(state): State<SummaryState>) -> Result<Response, Error> {
    summary_page(&state, Grouping::Day)
}

/// Display a bar chart of the total amount in each month.
pub async fn get_monthly_summary_page(
    State(state): State<SummaryState>,
) -> Result<Response, Error> {
    summary_page(&state, Grouping::Month)
}

fn summary_page(state: &SummaryState, grouping: Grouping) -> Result<Response, Error> {
    let totals = {
        let connection = state
            .db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)?;

        grouping.aggregate(&connection).inspect_err(|error| {
            tracing::error!("Could not aggregate transactions by {grouping:?}: {error}")
        })?
    };

    let view = if totals.is_empty() {
        no_data_view(grouping)
    } else {
        summary_view(grouping, &totals)
    };

    Ok(view.into_response())
}

fn no_data_view(grouping: Grouping) -> Markup {
    let nav_bar = NavBar::new(grouping.endpoint()).into_html();
    let new_transaction_link = link(endpoints::ROOT, "add some transactions");

    let content = html!(
        (nav_bar)

        div class="flex flex-col items-center px-6 py-8 mx-auto text-gray-900 dark:text-white"
        {
            h2 class="text-xl font-bold"
            {
                "Nothing here yet..."
            }

            p
            {
                "The " (grouping.style().title) " chart will show up here once you "
                (new_transaction_link) "."
            }
        }
    );

    base(grouping.style().title, &[], &content)
}

fn summary_view(grouping: Grouping, totals: &[PeriodTotal]) -> Markup {
    let nav_bar = NavBar::new(grouping.endpoint()).into_html();
    let style = grouping.style();
    let chart = SummaryChart {
        id: grouping.chart_id(),
        options: totals_chart(&style, totals).to_string(),
    };

    let content = html!(
        (nav_bar)

        div
            class="flex flex-col items-center px-2 lg:px-6 lg:py-8 mx-auto
                max-w-screen-xl text-gray-900 dark:text-white"
        {
            (chart_view(&chart))

            (totals_table(style.x_axis_name, totals))
        }
    );

    let scripts = [
        HeadElement::ScriptLink(ECHARTS_SCRIPT.to_owned()),
        chart_script(&chart),
    ];

    base(style.title, &scripts, &content)
}

fn totals_table(period_heading: &str, totals: &[PeriodTotal]) -> Markup {
    html!(
        section class="w-full lg:max-w-3xl dark:bg-gray-800 overflow-x-auto"
        {
            table id="totals-table" class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { (period_heading) }
                        th scope="col" class={ (TABLE_CELL_STYLE) " text-right" } { "Total" }
                    }
                }

                tbody
                {
                    @for total in totals {
                        tr class=(TABLE_ROW_STYLE)
                        {
                            td class=(TABLE_CELL_STYLE) { (total.period) }
                            td class={ (TABLE_CELL_STYLE) " text-right tabular-nums " (amount_class(total.total)) }
                            {
                                (format_amount(total.total))
                            }
                        }
                    }
                }
            }
        }
    )
}
