use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionShellProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

/// Full-width section with the centred content column.
#[function_component(SectionShell)]
pub fn section_shell(props: &SectionShellProps) -> Html {
    html! {
        <section id={props.id.clone()} class={classes!("section-shell", props.class.clone())}>
            <div class="section-inner">
                { for props.children.iter() }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    pub text: AttrValue,
}

#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    html! { <span class="badge">{ &props.text }</span> }
}

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub center: bool,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <h2 class={classes!("section-heading", props.center.then(|| "centered"))}>
            { &props.text }
        </h2>
    }
}

#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub children: Children,
    #[prop_or_default]
    pub on_click: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub badge_text: Option<AttrValue>,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let clickable = props.on_click.is_some();
    html! {
        <div
            class={classes!("card", clickable.then(|| "clickable"), props.class.clone())}
            onclick={props.on_click.clone()}
        >
            {
                if let Some(text) = &props.badge_text {
                    html! {
                        <div class="card-badge-row">
                            <span class="card-badge">{ text }</span>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            { for props.children.iter() }
            <div class="card-footer">
                <span class="check">{"✓"}</span>
                {"Ready for Scale"}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonPrimaryProps {
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or(AttrValue::Static("[ Start Building ]"))]
    pub text: AttrValue,
    #[prop_or_default]
    pub full_width: bool,
    #[prop_or_default]
    pub submit: bool,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(ButtonPrimary)]
pub fn button_primary(props: &ButtonPrimaryProps) -> Html {
    html! {
        <button
            type={if props.submit { "submit" } else { "button" }}
            class={classes!(
                "btn-primary",
                props.full_width.then(|| "full-width"),
                props.disabled.then(|| "disabled"),
            )}
            disabled={props.disabled}
            onclick={props.onclick.clone()}
        >
            { &props.text }
            <span class="arrow">{"→"}</span>
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonSecondaryProps {
    pub onclick: Callback<MouseEvent>,
    pub text: AttrValue,
}

#[function_component(ButtonSecondary)]
pub fn button_secondary(props: &ButtonSecondaryProps) -> Html {
    html! {
        <button type="button" class="btn-secondary" onclick={props.onclick.clone()}>
            { &props.text }
            <span class="arrow">{"→"}</span>
        </button>
    }
}
