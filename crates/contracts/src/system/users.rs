use crate::domain::common::{AggregateRoot, EntityForm};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

/// Роли платформы. Значения совпадают с `roleId` на сервере.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin = 1,
    Seller = 2,
    Buyer = 3,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Seller, Role::Buyer];

    pub fn id(self) -> i64 {
        self as i64
    }

    pub fn from_id(id: i64) -> Option<Self> {
        match id {
            1 => Some(Role::Admin),
            2 => Some(Role::Seller),
            3 => Some(Role::Buyer),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Administrador",
            Role::Seller => "Vendedor",
            Role::Buyer => "Comprador",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleInfo {
    pub id: i64,
    pub name: String,
}

/// Связь пользователя с ролью (`user_role[]` в ответе API)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRole {
    pub role_id: i64,
    #[serde(default)]
    pub role: Option<RoleInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    #[serde(default, rename = "user_role")]
    pub user_role: Vec<UserRole>,
}

impl User {
    pub fn has_role(&self, role: Role) -> bool {
        self.user_role.iter().any(|r| r.role_id == role.id())
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Подписи ролей через запятую; неизвестные id выводятся с именем с сервера
    pub fn role_labels(&self) -> String {
        self.user_role
            .iter()
            .map(|r| match Role::from_id(r.role_id) {
                Some(role) => role.label().to_string(),
                None => r
                    .role
                    .as_ref()
                    .map(|info| info.name.clone())
                    .unwrap_or_else(|| format!("#{}", r.role_id)),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl AggregateRoot for User {
    type Id = i64;
    type Form = UserForm;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn collection_path() -> &'static str {
        "/users"
    }

    fn element_name() -> &'static str {
        "Usuario"
    }

    fn list_name() -> &'static str {
        "Usuarios"
    }

    fn to_form(&self) -> Self::Form {
        UserForm {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            password: String::new(),
            role_ids: self.user_role.iter().map(|r| r.role_id).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserForm {
    #[validate(length(min = 1, message = "El nombre es obligatorio"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "El apellido es obligatorio"))]
    pub last_name: String,
    #[validate(email(message = "Ingrese un correo válido"))]
    pub email: String,
    /// Пустой пароль при обновлении означает «не менять»
    pub password: String,
    pub role_ids: Vec<i64>,
}

/// Тело запроса POST/PATCH `/users`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub roles: Vec<i64>,
}

const MIN_PASSWORD_LEN: usize = 6;

impl EntityForm for UserForm {
    type Payload = UserPayload;

    fn into_payload(&self, creating: bool) -> Result<Self::Payload, ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        let password = self.password.trim();
        if (creating || !password.is_empty()) && password.chars().count() < MIN_PASSWORD_LEN {
            errors.add(
                "password",
                ValidationError::new("length").with_message(
                    format!("La contraseña debe tener al menos {MIN_PASSWORD_LEN} caracteres")
                        .into(),
                ),
            );
        }
        if self.role_ids.is_empty() {
            errors.add(
                "role_ids",
                ValidationError::new("required")
                    .with_message("Seleccione al menos un rol".into()),
            );
        }

        if !errors.errors().is_empty() {
            return Err(errors);
        }
        Ok(UserPayload {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: Some(password.to_string()).filter(|p| !p.is_empty()),
            roles: self.role_ids.clone(),
        })
    }
}
