use yew::prelude::*;

use crate::models::Apartment;

#[derive(Properties, PartialEq, Clone)]
pub struct ApartmentCardProps {
    pub apartment: Apartment,
    /// Emite el id del apartamento al pulsar la card
    pub on_view: Callback<String>,
}

#[function_component(ApartmentCard)]
pub fn apartment_card(props: &ApartmentCardProps) -> Html {
    let a = &props.apartment;

    let on_click = {
        let on_view = props.on_view.clone();
        let id = a.id.clone();
        Callback::from(move |_| on_view.emit(id.clone()))
    };

    // En la card solo caben unos pocos servicios
    let services_preview: Vec<&String> = a.services.iter().take(3).collect();
    let remaining = a.services.len().saturating_sub(services_preview.len());

    html! {
        <div class="apartment-card" onclick={on_click}>
            <img class="apartment-cover" src={a.cover_image().to_string()} alt={a.name.clone()} />
            <div class="apartment-card-body">
                <h3 class="apartment-name">{ &a.name }</h3>
                <div class="apartment-meta">
                    <span class="apartment-price">
                        { format!("{:.2} EUR", a.price_per_night) }
                        <small>{ " / noche" }</small>
                    </span>
                    <span class="apartment-capacity">
                        { format!("👥 {}", a.capacity) }
                    </span>
                </div>
                <div class="apartment-services">
                    { for services_preview.iter().map(|s| html! {
                        <span class="service-chip">{ s }</span>
                    }) }
                    if remaining > 0 {
                        <span class="service-chip more">{ format!("+{}", remaining) }</span>
                    }
                </div>
            </div>
        </div>
    }
}
