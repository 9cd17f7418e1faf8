use log::{debug, info, warn};

use kettle_web::query::QueryParams;
use kettle_web::request::ParsedRequest;
use kettle_web::responders::file::StaticResolver;
use kettle_web::responders::{HandlerError, RequestHandler};
use kettle_web::response::{Http11, ResponseBuilder};

use crate::config::LoginConfig;
use crate::credential::{CredentialStore, Lookup};

const LOGIN_ACCOUNT_KEY: &str = "account";
const LOGIN_PASSWORD_KEY: &str = "password";

pub struct LoginForm<'p> {
  pub account: &'p str,
  pub password: &'p str,
}

impl<'p> LoginForm<'p> {
  // both fields are required
  pub fn from_params(params: &'p QueryParams) -> Result<LoginForm<'p>, HandlerError> {
    let account = params
      .value_by(LOGIN_ACCOUNT_KEY)
      .ok_or_else(|| HandlerError::MalformedBody(LOGIN_ACCOUNT_KEY.to_owned()))?;
    let password = params
      .value_by(LOGIN_PASSWORD_KEY)
      .ok_or_else(|| HandlerError::MalformedBody(LOGIN_PASSWORD_KEY.to_owned()))?;
    Ok(LoginForm { account, password })
  }
}

/// Serves the login page when there is no body, otherwise checks the posted
/// account and password and redirects.
///
/// A wrong password redirects to the failure page. An unknown account is a
/// `HandlerError::NotFound` and produces no response at all.
pub struct LoginHandler<R, S, B = Http11> {
  resolver: R,
  store: S,
  builder: B,
  config: LoginConfig,
}

impl<R: StaticResolver, S: CredentialStore> LoginHandler<R, S, Http11> {
  pub fn new(resolver: R, store: S) -> LoginHandler<R, S, Http11> {
    Self::with_config(resolver, store, LoginConfig::default())
  }

  pub fn with_config(resolver: R, store: S, config: LoginConfig) -> LoginHandler<R, S, Http11> {
    LoginHandler {
      resolver,
      store,
      builder: Http11,
      config,
    }
  }
}

impl<R: StaticResolver, S: CredentialStore, B: ResponseBuilder> LoginHandler<R, S, B> {
  pub fn with_builder<N: ResponseBuilder>(self, builder: N) -> LoginHandler<R, S, N> {
    LoginHandler {
      resolver: self.resolver,
      store: self.store,
      builder,
      config: self.config,
    }
  }

  fn serve_page(&self, request: &ParsedRequest) -> Result<Vec<u8>, HandlerError> {
    let resource = self.resolver.resolve(request.path())?;
    debug!("serving {} as {}", request.path(), resource.content_type);
    Ok(self.builder.ok(&resource.bytes, &resource.content_type))
  }

  fn login(&self, params: &QueryParams) -> Result<Vec<u8>, HandlerError> {
    let form = LoginForm::from_params(params)?;
    let credential = match self.store.find_by_account(form.account) {
      Lookup::Found(credential) => credential,
      Lookup::NotFound => {
        warn!("login attempt for unknown account {}", form.account);
        return Err(HandlerError::NotFound(form.account.to_owned()));
      }
    };

    if credential.check_password(form.password) {
      info!("{} logged in", credential.account);
      return Ok(self.builder.redirect(&self.config.success_path));
    }
    info!("wrong password for {}", credential.account);
    Ok(self.builder.redirect(&self.config.failure_path))
  }
}

impl<R: StaticResolver, S: CredentialStore, B: ResponseBuilder> RequestHandler for LoginHandler<R, S, B> {
  fn handle(&self, request: &ParsedRequest) -> Result<Vec<u8>, HandlerError> {
    if !request.has_body() {
      return self.serve_page(request);
    }
    self.login(&request.body_params())
  }
}
