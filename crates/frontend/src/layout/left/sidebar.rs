//! Sidebar component with collapsible menu groups

use crate::domain::{find_screen, EntityScreenDef};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<&'static str>, // screen keys
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "empresa",
            label: "Empresa",
            icon: "building",
            items: vec!["area", "cargo-empresa", "centro-costo", "cuenta-contable"],
        },
        MenuGroup {
            id: "personal",
            label: "Personal",
            icon: "users",
            items: vec!["contrato-laboral", "ctr"],
        },
        MenuGroup {
            id: "apoyo",
            label: "Apoyo",
            icon: "calendar",
            items: vec!["dias-utiles-mes", "entidad-eps"],
        },
        MenuGroup {
            id: "parametros",
            label: "Parámetros",
            icon: "settings",
            items: vec!["banco"],
        },
    ]
}

fn group_screens(group: &MenuGroup) -> Vec<&'static EntityScreenDef> {
    group.items.iter().filter_map(|key| find_screen(key)).collect()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // All groups start expanded
    let expanded_groups = RwSignal::new(
        get_menu_groups()
            .iter()
            .map(|g| g.id.to_string())
            .collect::<Vec<_>>(),
    );

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let gid_click = group.id.to_string();
                let gid_exp = group.id.to_string();
                let gid_show = group.id.to_string();
                let screens = group_screens(&group);

                view! {
                    <div>
                        // Parent item
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = gid_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&gid_exp)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        // Children
                        <Show when=move || expanded_groups.get().contains(&gid_show)>
                            <div class="app-sidebar__children">
                                {screens.iter().map(|screen| {
                                    let key = screen.key;
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.with(|a| a.as_deref() == Some(key))
                                            }
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_screen(key)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon("item")}
                                                <span>{screen.title}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SCREENS;

    #[test]
    fn test_every_screen_is_in_the_menu() {
        let listed: Vec<&str> = get_menu_groups()
            .iter()
            .flat_map(|g| group_screens(g))
            .map(|s| s.key)
            .collect();
        assert_eq!(listed.len(), SCREENS.len());
        for screen in SCREENS.iter() {
            assert!(listed.contains(&screen.key), "missing {}", screen.key);
        }
    }
}
