// ============================================================================
// FILTERS TAB - CRUD de reglas de precio del dashboard admin
// ============================================================================
// El formulario vive en un hijo con key por regla editada: al cambiar de
// objetivo (crear <-> editar) el componente se remonta con valores frescos.
// ============================================================================

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::toast::use_toast;
use crate::models::{CreateFilterRequest, FilterMode, PriceFilter};
use crate::services::filter_service;

const DAY_LABELS: [&str; 7] = ["L", "M", "X", "J", "V", "S", "D"];

/// Resumen legible de la condición de aplicación de una regla
fn mode_summary(filter: &PriceFilter) -> String {
    match filter.mode {
        FilterMode::Always => "Todas las noches".to_string(),
        FilterMode::WeekDays => filter
            .week_days
            .as_ref()
            .map(|days| {
                days.iter()
                    .filter_map(|d| DAY_LABELS.get(*d as usize))
                    .copied()
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .unwrap_or_default(),
        FilterMode::DateRange => {
            let start = filter
                .start_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "abierto".to_string());
            let end = filter
                .end_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "abierto".to_string());
            format!("{} a {}", start, end)
        }
        FilterMode::MinNights => filter
            .min_nights
            .map(|n| format!("{} noches o más", n))
            .unwrap_or_default(),
    }
}

fn parse_mode(raw: &str) -> FilterMode {
    match raw {
        "week_days" => FilterMode::WeekDays,
        "date_range" => FilterMode::DateRange,
        "min_nights" => FilterMode::MinNights,
        _ => FilterMode::Always,
    }
}

fn mode_value(mode: FilterMode) -> &'static str {
    match mode {
        FilterMode::Always => "always",
        FilterMode::WeekDays => "week_days",
        FilterMode::DateRange => "date_range",
        FilterMode::MinNights => "min_nights",
    }
}

#[derive(Properties, PartialEq)]
struct FilterFormProps {
    initial: Option<PriceFilter>,
    on_submit: Callback<CreateFilterRequest>,
    on_cancel_edit: Callback<()>,
    busy: bool,
}

#[function_component(FilterForm)]
fn filter_form(props: &FilterFormProps) -> Html {
    let toasts = use_toast();
    // El modo condiciona qué campos se pintan, por eso es estado y no ref
    let mode = use_state(|| {
        props
            .initial
            .as_ref()
            .map(|f| f.mode)
            .unwrap_or(FilterMode::Always)
    });
    let week_days = use_state(|| {
        props
            .initial
            .as_ref()
            .and_then(|f| f.week_days.clone())
            .unwrap_or_default()
    });

    let name_ref = use_node_ref();
    let value_ref = use_node_ref();
    let kind_ref = use_node_ref();
    let start_ref = use_node_ref();
    let end_ref = use_node_ref();
    let min_nights_ref = use_node_ref();

    let on_mode_change = {
        let mode = mode.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            mode.set(parse_mode(&select.value()));
        })
    };

    let toggle_day = {
        let week_days = week_days.clone();
        move |day: u8| {
            let week_days = week_days.clone();
            Callback::from(move |_: Event| {
                let mut days = (*week_days).clone();
                if let Some(pos) = days.iter().position(|d| *d == day) {
                    days.remove(pos);
                } else {
                    days.push(day);
                    days.sort_unstable();
                }
                week_days.set(days);
            })
        }
    };

    let on_submit = {
        let toasts = toasts.clone();
        let mode = mode.clone();
        let week_days = week_days.clone();
        let name_ref = name_ref.clone();
        let value_ref = value_ref.clone();
        let kind_ref = kind_ref.clone();
        let start_ref = start_ref.clone();
        let end_ref = end_ref.clone();
        let min_nights_ref = min_nights_ref.clone();
        let initial = props.initial.clone();
        let submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let name = name_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value().trim().to_string())
                .unwrap_or_default();
            if name.is_empty() {
                toasts.info("Ponle un nombre a la regla");
                return;
            }

            let value = value_ref
                .cast::<HtmlInputElement>()
                .and_then(|i| i.value().parse::<f64>().ok())
                .unwrap_or(0.0);
            if value <= 0.0 {
                toasts.info("El porcentaje debe ser mayor que cero");
                return;
            }

            let is_discount = kind_ref
                .cast::<HtmlSelectElement>()
                .map(|s| s.value() == "descuento")
                .unwrap_or(false);

            let mut request = CreateFilterRequest {
                name,
                active: initial.as_ref().map(|f| f.active).unwrap_or(true),
                is_discount,
                value,
                mode: *mode,
                week_days: None,
                start_date: None,
                end_date: None,
                min_nights: None,
            };

            match *mode {
                FilterMode::Always => {}
                FilterMode::WeekDays => {
                    if week_days.is_empty() {
                        toasts.info("Elige al menos un día de la semana");
                        return;
                    }
                    request.week_days = Some((*week_days).clone());
                }
                FilterMode::DateRange => {
                    let start = start_ref
                        .cast::<HtmlInputElement>()
                        .and_then(|i| i.value().parse().ok());
                    let end = end_ref
                        .cast::<HtmlInputElement>()
                        .and_then(|i| i.value().parse().ok());
                    if let (Some(s), Some(e)) = (start, end) {
                        if s > e {
                            toasts.info("El inicio del rango no puede ir después del fin");
                            return;
                        }
                    }
                    request.start_date = start;
                    request.end_date = end;
                }
                FilterMode::MinNights => {
                    let Some(min) = min_nights_ref
                        .cast::<HtmlInputElement>()
                        .and_then(|i| i.value().parse::<u32>().ok())
                        .filter(|n| *n >= 2)
                    else {
                        toasts.info("Indica una estancia mínima de al menos 2 noches");
                        return;
                    };
                    request.min_nights = Some(min);
                }
            }

            submit.emit(request);
        })
    };

    let on_cancel = {
        let cancel = props.on_cancel_edit.clone();
        Callback::from(move |_: MouseEvent| cancel.emit(()))
    };

    let editing = props.initial.is_some();
    let initial = props.initial.as_ref();

    let submit_label = if props.busy {
        "Guardando..."
    } else if editing {
        "Guardar cambios"
    } else {
        "Crear regla"
    };

    html! {
        <form class="filter-form" onsubmit={on_submit}>
            <h3>{ if editing { "Editar regla" } else { "Nueva regla" } }</h3>

            <div class="form-row">
                <div class="form-group">
                    <label>{ "Nombre" }</label>
                    <input
                        type="text"
                        ref={name_ref}
                        value={initial.map(|f| f.name.clone()).unwrap_or_default()}
                        placeholder="Ej. Recargo de fin de semana"
                    />
                </div>
                <div class="form-group">
                    <label>{ "Tipo" }</label>
                    <select ref={kind_ref}>
                        <option value="recargo" selected={!initial.map(|f| f.is_discount).unwrap_or(false)}>
                            { "Recargo" }
                        </option>
                        <option value="descuento" selected={initial.map(|f| f.is_discount).unwrap_or(false)}>
                            { "Descuento" }
                        </option>
                    </select>
                </div>
                <div class="form-group">
                    <label>{ "Porcentaje" }</label>
                    <input
                        type="number"
                        min="0"
                        step="0.5"
                        ref={value_ref}
                        value={initial.map(|f| f.value.to_string()).unwrap_or_default()}
                        placeholder="10"
                    />
                </div>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label>{ "Cuándo aplica" }</label>
                    <select onchange={on_mode_change}>
                        <option value={mode_value(FilterMode::Always)} selected={*mode == FilterMode::Always}>
                            { "Todas las noches" }
                        </option>
                        <option value={mode_value(FilterMode::WeekDays)} selected={*mode == FilterMode::WeekDays}>
                            { "Días de semana" }
                        </option>
                        <option value={mode_value(FilterMode::DateRange)} selected={*mode == FilterMode::DateRange}>
                            { "Rango de fechas" }
                        </option>
                        <option value={mode_value(FilterMode::MinNights)} selected={*mode == FilterMode::MinNights}>
                            { "Estancia mínima" }
                        </option>
                    </select>
                </div>

                if *mode == FilterMode::WeekDays {
                    <div class="form-group day-picker">
                        <label>{ "Días" }</label>
                        <div class="day-checkboxes">
                            { for DAY_LABELS.iter().enumerate().map(|(index, label)| {
                                let day = index as u8;
                                html! {
                                    <label class="day-checkbox" key={*label}>
                                        <input
                                            type="checkbox"
                                            checked={week_days.contains(&day)}
                                            onchange={toggle_day(day)}
                                        />
                                        { *label }
                                    </label>
                                }
                            }) }
                        </div>
                    </div>
                }

                if *mode == FilterMode::DateRange {
                    <div class="form-group">
                        <label>{ "Desde" }</label>
                        <input
                            type="date"
                            ref={start_ref.clone()}
                            value={initial.and_then(|f| f.start_date).map(|d| d.to_string()).unwrap_or_default()}
                        />
                    </div>
                    <div class="form-group">
                        <label>{ "Hasta" }</label>
                        <input
                            type="date"
                            ref={end_ref.clone()}
                            value={initial.and_then(|f| f.end_date).map(|d| d.to_string()).unwrap_or_default()}
                        />
                    </div>
                }

                if *mode == FilterMode::MinNights {
                    <div class="form-group">
                        <label>{ "Noches mínimas" }</label>
                        <input
                            type="number"
                            min="2"
                            ref={min_nights_ref.clone()}
                            value={initial.and_then(|f| f.min_nights).map(|n| n.to_string()).unwrap_or_default()}
                        />
                    </div>
                }
            </div>

            <div class="form-actions">
                <button type="submit" class="btn-primary" disabled={props.busy}>
                    { submit_label }
                </button>
                if editing {
                    <button type="button" class="btn-secondary" onclick={on_cancel}>
                        { "Cancelar edición" }
                    </button>
                }
            </div>
        </form>
    }
}

#[function_component(FiltersTab)]
pub fn filters_tab() -> Html {
    let filters = use_state(|| None::<Vec<PriceFilter>>);
    let editing = use_state(|| None::<PriceFilter>);
    let busy = use_state(|| false);
    let failed = use_state(|| false);
    let toasts = use_toast();

    {
        let filters = filters.clone();
        let failed = failed.clone();
        let toasts = toasts.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match filter_service::list_filters().await {
                    Ok(loaded) => filters.set(Some(loaded)),
                    Err(e) => {
                        log::error!("❌ Error cargando reglas de precio: {}", e);
                        toasts.error("No se pudieron cargar las reglas de precio");
                        failed.set(true);
                    }
                }
            });
            || ()
        });
    }

    let on_toggle = {
        let filters = filters.clone();
        let toasts = toasts.clone();
        Callback::from(move |(id, active): (String, bool)| {
            let filters = filters.clone();
            let toasts = toasts.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match filter_service::set_filter_active(&id, active).await {
                    Ok(updated) => {
                        let list = (*filters).clone().map(|list| {
                            list.into_iter()
                                .map(|f| if f.id == updated.id { updated.clone() } else { f })
                                .collect::<Vec<_>>()
                        });
                        filters.set(list);
                        toasts.success(if active {
                            "Regla activada"
                        } else {
                            "Regla desactivada"
                        });
                    }
                    Err(e) => toasts.error(&format!("No se pudo cambiar la regla: {}", e)),
                }
            });
        })
    };

    let on_delete = {
        let filters = filters.clone();
        let editing = editing.clone();
        let toasts = toasts.clone();
        Callback::from(move |id: String| {
            let filters = filters.clone();
            let editing = editing.clone();
            let toasts = toasts.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match filter_service::delete_filter(&id).await {
                    Ok(()) => {
                        let list = (*filters)
                            .clone()
                            .map(|list| list.into_iter().filter(|f| f.id != id).collect::<Vec<_>>());
                        filters.set(list);
                        if editing.as_ref().map(|f| f.id == id).unwrap_or(false) {
                            editing.set(None);
                        }
                        toasts.success("Regla eliminada");
                    }
                    Err(e) => toasts.error(&format!("No se pudo eliminar la regla: {}", e)),
                }
            });
        })
    };

    let on_edit = {
        let editing = editing.clone();
        Callback::from(move |filter: PriceFilter| editing.set(Some(filter)))
    };

    let on_cancel_edit = {
        let editing = editing.clone();
        Callback::from(move |()| editing.set(None))
    };

    let on_submit = {
        let filters = filters.clone();
        let editing = editing.clone();
        let busy = busy.clone();
        let toasts = toasts.clone();
        Callback::from(move |request: CreateFilterRequest| {
            if *busy {
                return;
            }
            busy.set(true);
            let filters = filters.clone();
            let editing = editing.clone();
            let busy = busy.clone();
            let toasts = toasts.clone();
            let target = (*editing).clone();
            wasm_bindgen_futures::spawn_local(async move {
                match target {
                    Some(original) => match filter_service::update_filter(&original.id, &request).await {
                        Ok(updated) => {
                            let list = (*filters).clone().map(|list| {
                                list.into_iter()
                                    .map(|f| if f.id == updated.id { updated.clone() } else { f })
                                    .collect::<Vec<_>>()
                            });
                            filters.set(list);
                            editing.set(None);
                            toasts.success("Regla actualizada");
                        }
                        Err(e) => toasts.error(&format!("No se pudo actualizar la regla: {}", e)),
                    },
                    None => match filter_service::create_filter(&request).await {
                        Ok(created) => {
                            let mut list = (*filters).clone().unwrap_or_default();
                            list.push(created);
                            filters.set(Some(list));
                            toasts.success("Regla creada");
                        }
                        Err(e) => toasts.error(&format!("No se pudo crear la regla: {}", e)),
                    },
                }
                busy.set(false);
            });
        })
    };

    if *failed {
        return html! {
            <div class="empty-state">{ "Reglas de precio no disponibles" }</div>
        };
    }

    let Some(list) = (*filters).clone() else {
        return html! { <div class="loading">{ "Cargando reglas de precio..." }</div> };
    };

    let form_key = editing
        .as_ref()
        .map(|f| f.id.clone())
        .unwrap_or_else(|| "new".to_string());

    html! {
        <div class="filters-tab">
            if list.is_empty() {
                <div class="empty-state">{ "No hay reglas de precio todavía" }</div>
            } else {
                <table class="filters-table">
                    <thead>
                        <tr>
                            <th>{ "Nombre" }</th>
                            <th>{ "Tipo" }</th>
                            <th>{ "Valor" }</th>
                            <th>{ "Cuándo" }</th>
                            <th>{ "Estado" }</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        { for list.iter().map(|filter| {
                            let toggle = {
                                let on_toggle = on_toggle.clone();
                                let id = filter.id.clone();
                                let next = !filter.active;
                                Callback::from(move |_: MouseEvent| on_toggle.emit((id.clone(), next)))
                            };
                            let edit = {
                                let on_edit = on_edit.clone();
                                let filter = filter.clone();
                                Callback::from(move |_: MouseEvent| on_edit.emit(filter.clone()))
                            };
                            let delete = {
                                let on_delete = on_delete.clone();
                                let id = filter.id.clone();
                                Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
                            };
                            html! {
                                <tr key={filter.id.clone()}>
                                    <td>{ &filter.name }</td>
                                    <td>{ filter.kind_label() }</td>
                                    <td>{ format!("{}%", filter.value) }</td>
                                    <td>{ mode_summary(filter) }</td>
                                    <td>
                                        <span class={classes!("chip", filter.active.then_some("chip-active"))}>
                                            { if filter.active { "Activa" } else { "Inactiva" } }
                                        </span>
                                    </td>
                                    <td class="row-actions">
                                        <button class="btn-link" onclick={toggle}>
                                            { if filter.active { "Desactivar" } else { "Activar" } }
                                        </button>
                                        <button class="btn-link" onclick={edit}>{ "Editar" }</button>
                                        <button class="btn-link btn-danger" onclick={delete}>{ "Eliminar" }</button>
                                    </td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            }

            <FilterForm
                key={form_key}
                initial={(*editing).clone()}
                on_submit={on_submit}
                on_cancel_edit={on_cancel_edit}
                busy={*busy}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn filter(mode: FilterMode) -> PriceFilter {
        PriceFilter {
            id: "f-1".to_string(),
            name: "Prueba".to_string(),
            active: true,
            is_discount: false,
            value: 10.0,
            mode,
            week_days: None,
            start_date: None,
            end_date: None,
            min_nights: None,
        }
    }

    #[test]
    fn week_day_summary_uses_spanish_letters() {
        let mut f = filter(FilterMode::WeekDays);
        f.week_days = Some(vec![4, 5, 6]);
        assert_eq!(mode_summary(&f), "V S D");
    }

    #[test]
    fn date_range_summary_marks_open_bounds() {
        let mut f = filter(FilterMode::DateRange);
        f.end_date = NaiveDate::from_ymd_opt(2026, 9, 30);
        assert_eq!(mode_summary(&f), "abierto a 2026-09-30");
    }

    #[test]
    fn mode_values_round_trip() {
        for mode in [
            FilterMode::Always,
            FilterMode::WeekDays,
            FilterMode::DateRange,
            FilterMode::MinNights,
        ] {
            assert_eq!(parse_mode(mode_value(mode)), mode);
        }
    }
}
