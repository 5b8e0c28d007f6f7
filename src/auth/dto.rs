use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub status: &'static str,
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Projection carried inside the token and echoed by `/login` and `/profile`.
#[derive(Debug, Serialize)]
pub struct TokenUser {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: TokenUser,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: TokenUser,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_response_shape() {
        let res = RegisterResponse {
            status: "created",
            id: 1,
            name: "A".into(),
            email: "a@x.com".into(),
        };
        let json = serde_json::to_string(&res).unwrap();
        assert!(json.contains(r#""status":"created""#));
        assert!(json.contains(r#""id":1"#));
        assert!(!json.contains("password"));
    }

    #[test]
    fn register_request_phone_defaults_to_empty() {
        let req: RegisterRequest =
            serde_json::from_str(r#"{"name":"A","email":"a@x.com","password":"pw"}"#).unwrap();
        assert_eq!(req.phone, "");
    }

    #[test]
    fn login_response_nests_user() {
        let res = LoginResponse {
            token: "t".into(),
            user: TokenUser {
                id: 2,
                name: "B".into(),
            },
        };
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["user"]["id"], 2);
        assert_eq!(json["user"]["name"], "B");
    }
}
