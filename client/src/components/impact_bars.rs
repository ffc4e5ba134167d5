//! Labelled progress bars for impact summaries.

use catalog::model::ImpactMetric;
use leptos::prelude::*;

#[component]
pub fn ImpactBars(metrics: Vec<ImpactMetric>) -> impl IntoView {
    view! {
        <div class="impact">
            {metrics
                .into_iter()
                .map(|m| {
                    view! {
                        <div class="impact__row">
                            <div class="impact__labels">
                                <span class="impact__label">{m.label}</span>
                                <span class="impact__value">{m.value}</span>
                            </div>
                            <div class="impact__track">
                                <div class="impact__fill" style:width=format!("{}%", m.percent)></div>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
