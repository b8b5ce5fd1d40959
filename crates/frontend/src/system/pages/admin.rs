use contracts::system::users::User;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

/// Карточка раздела администрирования
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminSection {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
    pub color_class: &'static str,
    /// Только для администраторов; остальные видны любому вошедшему пользователю
    pub admin_only: bool,
}

pub const ADMIN_SECTIONS: [AdminSection; 5] = [
    AdminSection {
        label: "Usuarios",
        href: "/admin/users",
        icon: "users",
        color_class: "admin-card--rose",
        admin_only: true,
    },
    AdminSection {
        label: "Productos",
        href: "/admin/products",
        icon: "products",
        color_class: "admin-card--indigo",
        admin_only: false,
    },
    AdminSection {
        label: "Categorías",
        href: "/admin/categories",
        icon: "folder",
        color_class: "admin-card--green",
        admin_only: true,
    },
    AdminSection {
        label: "Unidad de Medida",
        href: "/admin/units",
        icon: "ruler",
        color_class: "admin-card--purple",
        admin_only: true,
    },
    AdminSection {
        label: "Producto Padre",
        href: "/admin/predefined-products",
        icon: "list",
        color_class: "admin-card--orange",
        admin_only: true,
    },
];

/// Разделы, доступные пользователю: продавец видит только свои товары
pub fn visible_sections(user: &User) -> Vec<AdminSection> {
    let is_admin = user.is_admin();
    ADMIN_SECTIONS
        .into_iter()
        .filter(|section| is_admin || !section.admin_only)
        .collect()
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let auth = use_auth();
    let sections = move || {
        auth.user()
            .map(|user| visible_sections(&user))
            .unwrap_or_default()
    };

    view! {
        <div class="page">
            <h1 class="page__title page__title--center">"Vista Administrativa"</h1>
            <div class="admin-grid">
                {move || {
                    sections()
                        .into_iter()
                        .map(|section| view! {
                            <A href=section.href attr:class=format!("admin-card {}", section.color_class)>
                                <span class="admin-card__icon">{icon(section.icon)}</span>
                                <h2 class="admin-card__label">{section.label}</h2>
                            </A>
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::users::UserRole;
    use pretty_assertions::assert_eq;

    fn user(roles: &[i64]) -> User {
        User {
            id: 4,
            first_name: "Ana".into(),
            last_name: "Vera".into(),
            email: "ana@agromar.ec".into(),
            user_role: roles
                .iter()
                .map(|&role_id| UserRole { role_id, role: None })
                .collect(),
        }
    }

    fn labels(sections: &[AdminSection]) -> Vec<&'static str> {
        sections.iter().map(|s| s.label).collect()
    }

    #[test]
    fn test_sections_link_to_admin_routes() {
        assert!(ADMIN_SECTIONS.iter().all(|s| s.href.starts_with("/admin/")));
        let hrefs: Vec<&str> = ADMIN_SECTIONS.iter().map(|s| s.href).collect();
        assert_eq!(hrefs.len(), 5);
        assert!(hrefs.contains(&"/admin/predefined-products"));
    }

    #[test]
    fn test_admin_sees_every_section() {
        assert_eq!(visible_sections(&user(&[1])), ADMIN_SECTIONS.to_vec());
        assert_eq!(visible_sections(&user(&[2, 1])).len(), 5);
    }

    #[test]
    fn test_seller_sees_only_products() {
        assert_eq!(labels(&visible_sections(&user(&[2]))), vec!["Productos"]);
        assert_eq!(labels(&visible_sections(&user(&[3]))), vec!["Productos"]);
        assert_eq!(labels(&visible_sections(&user(&[]))), vec!["Productos"]);
    }
}
