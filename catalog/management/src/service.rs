//! The Catalog Management service handle.
//!
//! [`CatalogManagement`] wraps an [`ApiClient`] preconfigured with the
//! service URL, user agent and analytics identity, and exposes one async
//! method per operation. Each method forwards to [`ApiClient::call`].

use std::time::Duration;

use catalog_client::response::ResponseFormat;
use catalog_client::{
    ApiClient, ApiClientBuilder, ApiError, Authenticator, ConfigError, DetailedResponse, Operation,
    SdkIdentity, ServiceConfig,
};
use reqwest::header::HeaderMap;
use tracing::debug;
use url::Url;

use crate::operations::*;

/// Production endpoint of the service.
pub const DEFAULT_SERVICE_URL: &str = "https://cm.globalcatalog.cloud.ibm.com/api/v1-beta";

/// Name used for configuration lookup (`CATALOG_MANAGEMENT_*`) and analytics.
pub const DEFAULT_SERVICE_NAME: &str = "catalog_management";

const SERVICE_VERSION: &str = "V1";

/// The decoded result of an operation.
pub type Output<O> = <<O as Operation>::Format as ResponseFormat>::Output;

/// Async client for the Catalog Management API.
///
/// ## Examples
///
/// ```rust,ignore
/// use catalog_management::prelude::*;
///
/// let service = CatalogManagement::from_env()?;
/// let created = service
///     .create_catalog(CreateCatalogOptions::new().with_label("Test"))
///     .await?;
/// println!("{}: {:?}", created.status, created.result.id);
/// ```
#[derive(Debug, Clone)]
pub struct CatalogManagement {
    client: ApiClient,
}

impl CatalogManagement {
    /// Wraps an already configured client.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Returns a builder targeting `service_url` with the SDK's user agent
    /// and analytics identity set.
    pub fn builder(service_url: Url) -> ApiClientBuilder {
        identify(ApiClient::builder(service_url))
    }

    /// Creates a client for the production endpoint.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn with_authenticator(authenticator: Authenticator) -> Result<Self, ApiError> {
        let url = Url::parse(DEFAULT_SERVICE_URL).map_err(ConfigError::from)?;
        Ok(Self::new(
            Self::builder(url).authenticator(authenticator).build()?,
        ))
    }

    /// Creates a client from `CATALOG_MANAGEMENT_*` environment variables,
    /// after loading `.env`.
    ///
    /// ## Errors
    ///
    /// Returns [`ApiError::Config`] for missing credentials or bad values.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_config(ServiceConfig::from_env(DEFAULT_SERVICE_NAME)?)
    }

    /// Creates a client from loaded settings.
    ///
    /// ## Errors
    ///
    /// Returns an error if the configured URL is invalid or the HTTP client
    /// cannot be constructed.
    pub fn from_config(config: ServiceConfig) -> Result<Self, ApiError> {
        debug!(
            service = %config.service_name,
            url = config.url.as_deref().unwrap_or(DEFAULT_SERVICE_URL),
            "configuring catalog management client"
        );
        let builder = config.into_builder(DEFAULT_SERVICE_URL)?;
        Ok(Self::new(identify(builder).build()?))
    }

    /// Returns the underlying dispatcher.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Returns the underlying dispatcher mutably.
    pub fn client_mut(&mut self) -> &mut ApiClient {
        &mut self.client
    }

    pub fn service_url(&self) -> &Url {
        self.client.service_url()
    }

    /// Replaces the service URL.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError`] if `url` does not parse.
    pub fn set_service_url(&mut self, url: &str) -> Result<(), ConfigError> {
        self.client.set_service_url(url)
    }

    pub fn set_default_headers(&mut self, headers: HeaderMap) {
        self.client.set_default_headers(headers);
    }

    pub fn set_enable_gzip_compression(&mut self, enabled: bool) {
        self.client.set_enable_gzip_compression(enabled);
    }

    pub fn gzip_compression_enabled(&self) -> bool {
        self.client.gzip_compression_enabled()
    }

    pub fn enable_retries(&mut self, max_retries: u32, max_interval: Duration) {
        self.client.enable_retries(max_retries, max_interval);
    }

    pub fn disable_retries(&mut self) {
        self.client.disable_retries();
    }

    pub fn set_authenticator(&mut self, authenticator: Authenticator) {
        self.client.set_authenticator(authenticator);
    }
}

fn identify(builder: ApiClientBuilder) -> ApiClientBuilder {
    builder
        .user_agent(format!(
            "catalog-management-rust-sdk/{}",
            env!("CARGO_PKG_VERSION")
        ))
        .sdk_identity(SdkIdentity::new(DEFAULT_SERVICE_NAME, SERVICE_VERSION))
}

/// Declares one forwarding method per operation.
macro_rules! service_methods {
    ($($(#[$meta:meta])* $method:ident($options:ty);)*) => {
        impl CatalogManagement {
            $(
                $(#[$meta])*
                ///
                /// ## Errors
                ///
                /// Returns [`ApiError`] if the options are incomplete, the
                /// request fails, or the response cannot be decoded.
                pub async fn $method(
                    &self,
                    options: $options,
                ) -> Result<DetailedResponse<Output<$options>>, ApiError> {
                    self.client.call(options).await
                }
            )*
        }
    };
}

service_methods! {
    /// Gets the account level settings.
    get_catalog_account(GetCatalogAccountOptions);
    /// Updates the account level settings.
    update_catalog_account(UpdateCatalogAccountOptions);
    /// Gets the audit log of the account settings.
    get_catalog_account_audit(GetCatalogAccountAuditOptions);
    /// Gets the filters in effect for the account and its catalogs.
    get_catalog_account_filters(GetCatalogAccountFiltersOptions);

    /// Lists the account's catalogs.
    list_catalogs(ListCatalogsOptions);
    /// Creates a catalog.
    create_catalog(CreateCatalogOptions);
    /// Gets a catalog.
    get_catalog(GetCatalogOptions);
    /// Replaces a catalog.
    replace_catalog(ReplaceCatalogOptions);
    /// Deletes a catalog.
    delete_catalog(DeleteCatalogOptions);
    /// Gets the audit log of a catalog.
    get_catalog_audit(GetCatalogAuditOptions);

    /// Gets the enterprise settings.
    get_enterprise(GetEnterpriseOptions);
    /// Updates the enterprise settings.
    update_enterprise(UpdateEnterpriseOptions);
    /// Gets the audit log of the enterprise settings.
    get_enterprise_audit(GetEnterpriseAuditOptions);

    /// Lists the offerings visible to the account.
    get_consumption_offerings(GetConsumptionOfferingsOptions);
    /// Lists the offerings of a catalog.
    list_offerings(ListOfferingsOptions);
    /// Creates an offering.
    create_offering(CreateOfferingOptions);
    /// Imports a new version into an offering.
    import_offering_version(ImportOfferingVersionOptions);
    /// Imports an offering from a repository.
    import_offering(ImportOfferingOptions);
    /// Reloads an existing version of an offering.
    reload_offering(ReloadOfferingOptions);
    /// Gets an offering.
    get_offering(GetOfferingOptions);
    /// Replaces an offering.
    replace_offering(ReplaceOfferingOptions);
    /// Applies a JSON Patch to an offering.
    update_offering(UpdateOfferingOptions);
    /// Deletes an offering.
    delete_offering(DeleteOfferingOptions);
    /// Gets the audit log of an offering.
    get_offering_audit(GetOfferingAuditOptions);
    /// Sets the icon of an offering.
    replace_offering_icon(ReplaceOfferingIconOptions);
    /// Changes the publish approvals of an offering.
    update_offering_ibm(UpdateOfferingIbmOptions);
    /// Lists the updates available for an installed offering.
    get_offering_updates(GetOfferingUpdatesOptions);
    /// Downloads the source archive of an offering version.
    get_offering_source(GetOfferingSourceOptions);
    /// Downloads the source of an offering through a keyed URL.
    get_offering_source_url(GetOfferingSourceUrlOptions);
    /// Gets the readme of a version as markdown.
    get_offering_about(GetOfferingAboutOptions);
    /// Gets the text of a version's license.
    get_offering_license(GetOfferingLicenseOptions);
    /// Gets the container images of a version.
    get_offering_container_images(GetOfferingContainerImagesOptions);

    /// Deprecates a version.
    deprecate_version(DeprecateVersionOptions);
    /// Publishes a version to the members of the account.
    account_publish_version(AccountPublishVersionOptions);
    /// Publishes a version to IBMers in the public catalog.
    ibm_publish_version(IbmPublishVersionOptions);
    /// Publishes a version to all users of the public catalog.
    public_publish_version(PublicPublishVersionOptions);
    /// Commits a working copy.
    commit_version(CommitVersionOptions);
    /// Copies a version to a new target kind.
    copy_version(CopyVersionOptions);
    /// Creates a working copy of a version.
    get_offering_working_copy(GetOfferingWorkingCopyOptions);
    /// Gets the offering/kind/version branch of a version.
    get_version(GetVersionOptions);
    /// Deletes a version.
    delete_version(DeleteVersionOptions);
    /// Lists the updates available for an installed version.
    get_version_updates(GetVersionUpdatesOptions);

    /// Gets a Kubernetes cluster.
    get_cluster(GetClusterOptions);
    /// Lists the namespaces of a cluster.
    get_namespaces(GetNamespacesOptions);
    /// Deploys operators on a cluster.
    deploy_operators(DeployOperatorsOptions);
    /// Lists the operators deployed on a cluster.
    list_operators(ListOperatorsOptions);
    /// Updates the operators on a cluster.
    replace_operators(ReplaceOperatorsOptions);
    /// Deletes operators from a cluster.
    delete_operators(DeleteOperatorsOptions);
    /// Starts installing a version.
    install_version(InstallVersionOptions);
    /// Starts the pre-install of a version.
    preinstall_version(PreinstallVersionOptions);
    /// Gets the pre-install status of a version.
    get_preinstall(GetPreinstallOptions);
    /// Starts validating a version by installing it.
    validate_install(ValidateInstallOptions);
    /// Gets the validation status of a version.
    get_validation_status(GetValidationStatusOptions);
    /// Gets the override values used by the last validation.
    get_override_values(GetOverrideValuesOptions);

    /// Searches objects across catalogs.
    search_objects(SearchObjectsOptions);
    /// Lists the objects of a catalog.
    list_objects(ListObjectsOptions);
    /// Creates a catalog object.
    create_object(CreateObjectOptions);
    /// Gets a catalog object.
    get_object(GetObjectOptions);
    /// Replaces a catalog object.
    replace_object(ReplaceObjectOptions);
    /// Deletes a catalog object.
    delete_object(DeleteObjectOptions);
    /// Gets the audit log of a catalog object.
    get_object_audit(GetObjectAuditOptions);
    /// Publishes an object to the account.
    account_publish_object(AccountPublishObjectOptions);
    /// Shares an object with its access list.
    shared_publish_object(SharedPublishObjectOptions);
    /// Shares an object with IBMers.
    ibm_publish_object(IbmPublishObjectOptions);
    /// Shares an object with all users.
    public_publish_object(PublicPublishObjectOptions);
    /// Adds an account to an object's access list.
    create_object_access(CreateObjectAccessOptions);
    /// Checks for an account on an object's access list.
    get_object_access(GetObjectAccessOptions);
    /// Removes an account from an object's access list.
    delete_object_access(DeleteObjectAccessOptions);
    /// Gets an object's access list.
    get_object_access_list(GetObjectAccessListOptions);
    /// Removes accounts from an object's access list.
    delete_object_access_list(DeleteObjectAccessListOptions);
    /// Adds accounts to an object's access list.
    add_object_access_list(AddObjectAccessListOptions);

    /// Creates an offering instance.
    create_offering_instance(CreateOfferingInstanceOptions);
    /// Gets an offering instance.
    get_offering_instance(GetOfferingInstanceOptions);
    /// Replaces an offering instance.
    put_offering_instance(PutOfferingInstanceOptions);
    /// Deletes an offering instance.
    delete_offering_instance(DeleteOfferingInstanceOptions);
    /// Creates a version instance.
    create_version_instance(CreateVersionInstanceOptions);
    /// Gets a version instance.
    get_version_instance(GetVersionInstanceOptions);
    /// Replaces a version instance.
    put_version_instance(PutVersionInstanceOptions);
    /// Deletes a version instance.
    delete_version_instance(DeleteVersionInstanceOptions);
    /// Creates a license entitlement.
    create_license_entitlement(CreateLicenseEntitlementOptions);
    /// Deletes a license entitlement.
    delete_license_entitlement(DeleteLicenseEntitlementOptions);

    /// Lists the charts of a helm repository.
    get_repos(GetReposOptions);
    /// Gets the details of a helm chart.
    get_repo(GetRepoOptions);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> ServiceConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServiceConfig::from_lookup(DEFAULT_SERVICE_NAME, |key| vars.get(key).cloned()).unwrap()
    }

    #[test]
    fn defaults_to_production_url() {
        let service = CatalogManagement::from_config(config(&[])).unwrap();
        assert_eq!(service.service_url().as_str(), DEFAULT_SERVICE_URL);
        assert!(service.client().retry_policy().is_none());
    }

    #[test]
    fn configured_url_and_retries_apply() {
        let service = CatalogManagement::from_config(config(&[
            ("CATALOG_MANAGEMENT_URL", "https://example.com/api/v1-beta"),
            ("CATALOG_MANAGEMENT_ENABLE_RETRIES", "true"),
            ("CATALOG_MANAGEMENT_MAX_RETRIES", "2"),
        ]))
        .unwrap();

        assert_eq!(service.service_url().as_str(), "https://example.com/api/v1-beta");
        assert_eq!(service.client().retry_policy().unwrap().max_retries, 2);
    }

    #[test]
    fn setters_reach_the_client() {
        let mut service = CatalogManagement::with_authenticator(Authenticator::None).unwrap();
        service.set_enable_gzip_compression(true);
        service.enable_retries(3, Duration::from_secs(5));
        assert!(service.gzip_compression_enabled());
        assert!(service.client().retry_policy().is_some());

        service.disable_retries();
        assert!(service.client().retry_policy().is_none());
        assert!(service.set_service_url("not a url").is_err());
    }
}
