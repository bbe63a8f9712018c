use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct YearStripProps {
    pub years: &'static [i32],
    pub current_index: usize,
    pub on_select_year: Callback<i32>,
    /// Raw value of the range input; the timeline snaps it to a year.
    pub on_slider_change: Callback<f64>,
}

#[function_component(YearStrip)]
pub fn year_strip(props: &YearStripProps) -> Html {
    let on_slider_input = {
        let on_slider_change = props.on_slider_change.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<web_sys::HtmlInputElement>().value_as_number();
            on_slider_change.emit(value);
        })
    };

    let first = props.years.first().copied().unwrap_or_default();
    let last = props.years.last().copied().unwrap_or_default();
    let current = props.years.get(props.current_index).copied().unwrap_or(first);

    html! {
        <div class="year-strip">
            <div class="timeline-years">
                {
                    props.years.iter().enumerate().map(|(index, &year)| {
                        let on_select = props.on_select_year.clone();
                        let onclick = Callback::from(move |_| on_select.emit(year));
                        html! {
                            <div
                                key={year}
                                class={classes!("year-label", (index == props.current_index).then_some("active"))}
                                {onclick}
                            >
                                { year.to_string() }
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
            <div class="year-slider">
                <input
                    class="progress"
                    type="range"
                    min={first.to_string()}
                    max={last.to_string()}
                    step="1"
                    value={current.to_string()}
                    oninput={on_slider_input}
                    title="Year"
                />
            </div>
        </div>
    }
}
