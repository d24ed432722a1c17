//! The Catalog Management endpoint table.
//!
//! One `const` [`Endpoint`] per remote operation. Options types point at
//! these through [`Operation::ENDPOINT`](catalog_client::Operation::ENDPOINT);
//! [`ALL_ENDPOINTS`] lists every row for table-wide checks.
//!
//! ## Endpoints
//!
//! ### Account (4)
//! - `GetCatalogAccount` - GET /catalogaccount
//! - `UpdateCatalogAccount` - PUT /catalogaccount
//! - `GetCatalogAccountAudit` - GET /catalogaccount/audit
//! - `GetCatalogAccountFilters` - GET /catalogaccount/filters
//!
//! ### Catalogs (6)
//! - `ListCatalogs` - GET /catalogs
//! - `CreateCatalog` - POST /catalogs
//! - `GetCatalog` / `ReplaceCatalog` / `DeleteCatalog` - /catalogs/{catalog_identifier}
//! - `GetCatalogAudit` - GET /catalogs/{catalog_identifier}/audit
//!
//! ### Enterprise (3)
//! - `GetEnterprise` / `UpdateEnterprise` - /enterprises/{enterprise_id}
//! - `GetEnterpriseAudit` - GET /enterprises/{enterprise_id}/audit
//!
//! ### Offerings (19)
//! - `ListOfferings` / `CreateOffering` - /catalogs/{catalog_identifier}/offerings
//! - `GetOffering` / `ReplaceOffering` / `UpdateOffering` / `DeleteOffering` -
//!   /catalogs/{catalog_identifier}/offerings/{offering_id}
//! - `GetOfferingAbout` / `GetOfferingLicense` / `GetOfferingContainerImages` -
//!   /versions/{version_loc_id}/...
//! - plus imports, reload, icon, approvals, updates and source downloads
//!
//! ### Versions (10)
//! - Publish, deprecate, commit, copy and working copy actions on
//!   /versions/{version_loc_id}
//!
//! ### Deploy (12)
//! - Clusters, namespaces and OLM operators under /deploy/kubernetes
//! - Install, pre-install and validation under /versions/{version_loc_id}
//!
//! ### Objects (17), Instances (8), License entitlements (2), Repos (2)
//! - /objects, /catalogs/{catalog_identifier}/objects
//! - /instances/offerings, /instances/versions
//! - /license/entitlements, /repo/{type}

use catalog_define::{Endpoint, MediaType, Param, RequestBody, ResponseBody, RestMethod};

/// Caller-supplied refresh token forwarded to cluster and install operations.
pub const AUTH_REFRESH_TOKEN: &str = "X-Auth-Refresh-Token";

/// Repository token forwarded by offering imports.
pub const AUTH_TOKEN: &str = "X-Auth-Token";

/// Optimistic concurrency etag.
pub const IF_MATCH: &str = "If-Match";

const CATALOG: Param = Param::path("catalog_identifier");
const OFFERING: Param = Param::path("offering_id");
const VERSION_LOC: Param = Param::path("version_loc_id");
const OBJECT: Param = Param::path("object_identifier");
const REFRESH_TOKEN: Param = Param::header(AUTH_REFRESH_TOKEN).required();

const VERSION_PARAMS: &[Param] = &[VERSION_LOC];
const CATALOG_PARAMS: &[Param] = &[CATALOG];
const OFFERING_PARAMS: &[Param] = &[CATALOG, OFFERING];
const OBJECT_PARAMS: &[Param] = &[CATALOG, OBJECT];
const PAGE_PARAMS: &[Param] = &[CATALOG, Param::query("limit"), Param::query("offset")];

const IMPORT_BODY: [Param; 3] = [
    Param::body("tags"),
    Param::body("target_kinds"),
    Param::body("content"),
];

const INSTALL_PARAMS: &[Param] = &[
    VERSION_LOC,
    REFRESH_TOKEN,
    Param::body("cluster_id"),
    Param::body("region"),
    Param::body("namespace"),
    Param::body("override_values"),
    Param::body("entitlement_apikey"),
    Param::body("schematics"),
    Param::body("script"),
    Param::body("script_id"),
    Param::body("version_locator_id"),
    Param::body("vcenter_id"),
    Param::body("vcenter_user"),
    Param::body("vcenter_password"),
    Param::body("vcenter_location"),
    Param::body("vcenter_datastore"),
];

const OPERATOR_BODY_PARAMS: &[Param] = &[
    REFRESH_TOKEN,
    Param::body("cluster_id"),
    Param::body("region"),
    Param::body("namespaces"),
    Param::body("all_namespaces"),
    Param::body("version_locator_id"),
];

const OPERATOR_QUERY_PARAMS: &[Param] = &[
    REFRESH_TOKEN,
    Param::query("cluster").required(),
    Param::query("region").required(),
    Param::query("version_locator_id").required(),
];

/// A GET returning a JSON object.
const fn get_json(
    id: &'static str,
    path: &'static str,
    description: &'static str,
    params: &'static [Param],
) -> Endpoint {
    Endpoint {
        id,
        method: RestMethod::Get,
        path,
        description,
        params,
        accept: Some(MediaType::Json),
        request: RequestBody::None,
        response: ResponseBody::Json,
    }
}

/// A bodyless call with no response body.
const fn action(
    id: &'static str,
    method: RestMethod,
    path: &'static str,
    description: &'static str,
    params: &'static [Param],
) -> Endpoint {
    Endpoint {
        id,
        method,
        path,
        description,
        params,
        accept: None,
        request: RequestBody::None,
        response: ResponseBody::Empty,
    }
}

/// A call sending and returning JSON objects.
const fn send_json(
    id: &'static str,
    method: RestMethod,
    path: &'static str,
    description: &'static str,
    params: &'static [Param],
) -> Endpoint {
    Endpoint {
        id,
        method,
        path,
        description,
        params,
        accept: Some(MediaType::Json),
        request: RequestBody::Json,
        response: ResponseBody::Json,
    }
}

// =============================================================================
// Account
// =============================================================================

pub const GET_CATALOG_ACCOUNT: Endpoint = get_json(
    "GetCatalogAccount",
    "/catalogaccount",
    "Get the account level settings",
    &[],
);

pub const UPDATE_CATALOG_ACCOUNT: Endpoint = Endpoint {
    id: "UpdateCatalogAccount",
    method: RestMethod::Put,
    path: "/catalogaccount",
    description: "Update the account level settings",
    params: &[
        Param::body("id"),
        Param::body("hide_IBM_cloud_catalog"),
        Param::body("account_filters"),
    ],
    accept: None,
    request: RequestBody::Json,
    response: ResponseBody::Empty,
};

pub const GET_CATALOG_ACCOUNT_AUDIT: Endpoint = get_json(
    "GetCatalogAccountAudit",
    "/catalogaccount/audit",
    "Get the audit log of the account settings",
    &[],
);

pub const GET_CATALOG_ACCOUNT_FILTERS: Endpoint = get_json(
    "GetCatalogAccountFilters",
    "/catalogaccount/filters",
    "Get the accumulated filters of the account and its catalogs",
    &[Param::query("catalog")],
);

// =============================================================================
// Catalogs
// =============================================================================

pub const LIST_CATALOGS: Endpoint = get_json("ListCatalogs", "/catalogs", "List the account's catalogs", &[]);

pub const CREATE_CATALOG: Endpoint = send_json(
    "CreateCatalog",
    RestMethod::Post,
    "/catalogs",
    "Create a catalog",
    &[],
);

pub const GET_CATALOG: Endpoint = get_json(
    "GetCatalog",
    "/catalogs/{catalog_identifier}",
    "Get a catalog",
    CATALOG_PARAMS,
);

pub const REPLACE_CATALOG: Endpoint = send_json(
    "ReplaceCatalog",
    RestMethod::Put,
    "/catalogs/{catalog_identifier}",
    "Replace a catalog",
    CATALOG_PARAMS,
);

pub const DELETE_CATALOG: Endpoint = action(
    "DeleteCatalog",
    RestMethod::Delete,
    "/catalogs/{catalog_identifier}",
    "Delete a catalog",
    CATALOG_PARAMS,
);

pub const GET_CATALOG_AUDIT: Endpoint = get_json(
    "GetCatalogAudit",
    "/catalogs/{catalog_identifier}/audit",
    "Get the audit log of a catalog",
    CATALOG_PARAMS,
);

// =============================================================================
// Enterprise
// =============================================================================

const ENTERPRISE_PARAMS: &[Param] = &[Param::path("enterprise_id")];

pub const GET_ENTERPRISE: Endpoint = get_json(
    "GetEnterprise",
    "/enterprises/{enterprise_id}",
    "Get the enterprise settings",
    ENTERPRISE_PARAMS,
);

pub const UPDATE_ENTERPRISE: Endpoint = Endpoint {
    id: "UpdateEnterprise",
    method: RestMethod::Put,
    path: "/enterprises/{enterprise_id}",
    description: "Update the enterprise settings",
    params: ENTERPRISE_PARAMS,
    accept: None,
    request: RequestBody::Json,
    response: ResponseBody::Empty,
};

pub const GET_ENTERPRISE_AUDIT: Endpoint = get_json(
    "GetEnterpriseAudit",
    "/enterprises/{enterprise_id}/audit",
    "Get the audit log of the enterprise settings",
    ENTERPRISE_PARAMS,
);

// =============================================================================
// Offerings
// =============================================================================

pub const GET_CONSUMPTION_OFFERINGS: Endpoint = get_json(
    "GetConsumptionOfferings",
    "/offerings",
    "List offerings visible to the account",
    &[
        Param::query("digest"),
        Param::query("catalog"),
        Param::query("select"),
        Param::query("includeHidden"),
        Param::query("limit"),
        Param::query("offset"),
    ],
);

pub const LIST_OFFERINGS: Endpoint = get_json(
    "ListOfferings",
    "/catalogs/{catalog_identifier}/offerings",
    "List the offerings of a catalog",
    &[
        CATALOG,
        Param::query("digest"),
        Param::query("limit"),
        Param::query("offset"),
        Param::query("name"),
        Param::query("sort"),
    ],
);

pub const CREATE_OFFERING: Endpoint = send_json(
    "CreateOffering",
    RestMethod::Post,
    "/catalogs/{catalog_identifier}/offerings",
    "Create an offering",
    CATALOG_PARAMS,
);

pub const IMPORT_OFFERING_VERSION: Endpoint = send_json(
    "ImportOfferingVersion",
    RestMethod::Post,
    "/catalogs/{catalog_identifier}/offerings/{offering_id}/version",
    "Import a new version into an offering",
    &[
        CATALOG,
        OFFERING,
        Param::query("zipurl"),
        Param::query("targetVersion"),
        Param::query("includeConfig"),
        Param::query("isVSI"),
        Param::query("repoType"),
        IMPORT_BODY[0],
        IMPORT_BODY[1],
        IMPORT_BODY[2],
    ],
);

pub const IMPORT_OFFERING: Endpoint = send_json(
    "ImportOffering",
    RestMethod::Post,
    "/catalogs/{catalog_identifier}/import/offerings",
    "Import an offering from a repository",
    &[
        CATALOG,
        Param::header(AUTH_TOKEN),
        Param::query("zipurl"),
        Param::query("offeringID"),
        Param::query("targetVersion"),
        Param::query("includeConfig"),
        Param::query("isVSI"),
        Param::query("repoType"),
        IMPORT_BODY[0],
        IMPORT_BODY[1],
        IMPORT_BODY[2],
    ],
);

pub const RELOAD_OFFERING: Endpoint = send_json(
    "ReloadOffering",
    RestMethod::Put,
    "/catalogs/{catalog_identifier}/offerings/{offering_id}/reload",
    "Reload an existing version of an offering",
    &[
        CATALOG,
        OFFERING,
        Param::query("targetVersion").required(),
        Param::query("zipurl"),
        Param::query("repoType"),
        IMPORT_BODY[0],
        IMPORT_BODY[1],
        IMPORT_BODY[2],
    ],
);

pub const GET_OFFERING: Endpoint = get_json(
    "GetOffering",
    "/catalogs/{catalog_identifier}/offerings/{offering_id}",
    "Get an offering",
    OFFERING_PARAMS,
);

pub const REPLACE_OFFERING: Endpoint = send_json(
    "ReplaceOffering",
    RestMethod::Put,
    "/catalogs/{catalog_identifier}/offerings/{offering_id}",
    "Replace an offering",
    OFFERING_PARAMS,
);

pub const UPDATE_OFFERING: Endpoint = Endpoint {
    id: "UpdateOffering",
    method: RestMethod::Patch,
    path: "/catalogs/{catalog_identifier}/offerings/{offering_id}",
    description: "Apply a JSON Patch to an offering",
    params: &[CATALOG, OFFERING, Param::header(IF_MATCH).required()],
    accept: Some(MediaType::Json),
    request: RequestBody::JsonPatch,
    response: ResponseBody::Json,
};

pub const DELETE_OFFERING: Endpoint = action(
    "DeleteOffering",
    RestMethod::Delete,
    "/catalogs/{catalog_identifier}/offerings/{offering_id}",
    "Delete an offering",
    OFFERING_PARAMS,
);

pub const GET_OFFERING_AUDIT: Endpoint = get_json(
    "GetOfferingAudit",
    "/catalogs/{catalog_identifier}/offerings/{offering_id}/audit",
    "Get the audit log of an offering",
    OFFERING_PARAMS,
);

pub const REPLACE_OFFERING_ICON: Endpoint = Endpoint {
    id: "ReplaceOfferingIcon",
    method: RestMethod::Put,
    path: "/catalogs/{catalog_identifier}/offerings/{offering_id}/icon/{file_name}",
    description: "Set the icon of an offering",
    params: &[CATALOG, OFFERING, Param::path("file_name")],
    accept: Some(MediaType::Json),
    request: RequestBody::None,
    response: ResponseBody::Json,
};

pub const UPDATE_OFFERING_IBM: Endpoint = Endpoint {
    id: "UpdateOfferingIbm",
    method: RestMethod::Post,
    path: "/catalogs/{catalog_identifier}/offerings/{offering_id}/publish/{approval_type}/{approved}",
    description: "Change the publish approvals of an offering",
    params: &[
        CATALOG,
        OFFERING,
        Param::path("approval_type"),
        Param::path("approved"),
    ],
    accept: Some(MediaType::Json),
    request: RequestBody::None,
    response: ResponseBody::Json,
};

pub const GET_OFFERING_UPDATES: Endpoint = Endpoint {
    id: "GetOfferingUpdates",
    method: RestMethod::Get,
    path: "/catalogs/{catalog_identifier}/offerings/{offering_id}/updates",
    description: "List the updates available for an installed offering",
    params: &[
        CATALOG,
        OFFERING,
        REFRESH_TOKEN,
        Param::query("kind").required(),
        Param::query("version"),
        Param::query("cluster_id"),
        Param::query("region"),
        Param::query("resource_group_id"),
        Param::query("namespace"),
    ],
    accept: Some(MediaType::Json),
    request: RequestBody::None,
    response: ResponseBody::JsonArray,
};

pub const GET_OFFERING_SOURCE: Endpoint = Endpoint {
    id: "GetOfferingSource",
    method: RestMethod::Get,
    path: "/offering/source",
    description: "Download the source archive of an offering version",
    params: &[
        Param::query("version").required(),
        Param::query("catalogID"),
        Param::query("name"),
        Param::query("id"),
        Param::query("kind"),
        Param::query("channel"),
    ],
    accept: Some(MediaType::Yaml),
    request: RequestBody::None,
    response: ResponseBody::Binary,
};

pub const GET_OFFERING_SOURCE_URL: Endpoint = Endpoint {
    id: "GetOfferingSourceUrl",
    method: RestMethod::Get,
    path: "/offering/source/url/{key_identifier}",
    description: "Download the source of an offering through a keyed URL",
    params: &[
        Param::path("key_identifier"),
        Param::query("catalogID"),
        Param::query("name"),
        Param::query("id"),
    ],
    accept: Some(MediaType::Yaml),
    request: RequestBody::None,
    response: ResponseBody::Binary,
};

pub const GET_OFFERING_ABOUT: Endpoint = Endpoint {
    id: "GetOfferingAbout",
    method: RestMethod::Get,
    path: "/versions/{version_loc_id}/about",
    description: "Get the readme of a version as markdown",
    params: VERSION_PARAMS,
    accept: Some(MediaType::Markdown),
    request: RequestBody::None,
    response: ResponseBody::Text,
};

pub const GET_OFFERING_LICENSE: Endpoint = Endpoint {
    id: "GetOfferingLicense",
    method: RestMethod::Get,
    path: "/versions/{version_loc_id}/licenses/{license_id}",
    description: "Get the text of a version's license",
    params: &[VERSION_LOC, Param::path("license_id")],
    accept: Some(MediaType::PlainText),
    request: RequestBody::None,
    response: ResponseBody::Text,
};

pub const GET_OFFERING_CONTAINER_IMAGES: Endpoint = get_json(
    "GetOfferingContainerImages",
    "/versions/{version_loc_id}/containerImages",
    "Get the container images of a version",
    VERSION_PARAMS,
);

// =============================================================================
// Versions
// =============================================================================

pub const DEPRECATE_VERSION: Endpoint = action(
    "DeprecateVersion",
    RestMethod::Post,
    "/versions/{version_loc_id}/deprecate",
    "Deprecate a version",
    VERSION_PARAMS,
);

pub const ACCOUNT_PUBLISH_VERSION: Endpoint = action(
    "AccountPublishVersion",
    RestMethod::Post,
    "/versions/{version_loc_id}/account-publish",
    "Publish a version to the members of the account",
    VERSION_PARAMS,
);

pub const IBM_PUBLISH_VERSION: Endpoint = action(
    "IbmPublishVersion",
    RestMethod::Post,
    "/versions/{version_loc_id}/ibm-publish",
    "Publish a version to IBMers in the public catalog",
    VERSION_PARAMS,
);

pub const PUBLIC_PUBLISH_VERSION: Endpoint = action(
    "PublicPublishVersion",
    RestMethod::Post,
    "/versions/{version_loc_id}/public-publish",
    "Publish a version to all users of the public catalog",
    VERSION_PARAMS,
);

pub const COMMIT_VERSION: Endpoint = action(
    "CommitVersion",
    RestMethod::Post,
    "/versions/{version_loc_id}/commit",
    "Commit a working copy",
    VERSION_PARAMS,
);

pub const COPY_VERSION: Endpoint = Endpoint {
    id: "CopyVersion",
    method: RestMethod::Post,
    path: "/versions/{version_loc_id}/copy",
    description: "Copy a version to a new target kind",
    params: &[VERSION_LOC, IMPORT_BODY[0], IMPORT_BODY[1], IMPORT_BODY[2]],
    accept: None,
    request: RequestBody::Json,
    response: ResponseBody::Empty,
};

pub const GET_OFFERING_WORKING_COPY: Endpoint = Endpoint {
    id: "GetOfferingWorkingCopy",
    method: RestMethod::Post,
    path: "/versions/{version_loc_id}/workingcopy",
    description: "Create a working copy of a version",
    params: VERSION_PARAMS,
    accept: Some(MediaType::Json),
    request: RequestBody::None,
    response: ResponseBody::Json,
};

pub const GET_VERSION: Endpoint = get_json(
    "GetVersion",
    "/versions/{version_loc_id}",
    "Get the offering/kind/version branch of a version",
    VERSION_PARAMS,
);

pub const DELETE_VERSION: Endpoint = action(
    "DeleteVersion",
    RestMethod::Delete,
    "/versions/{version_loc_id}",
    "Delete a version",
    VERSION_PARAMS,
);

pub const GET_VERSION_UPDATES: Endpoint = Endpoint {
    id: "GetVersionUpdates",
    method: RestMethod::Get,
    path: "/versions/{version_loc_id}/updates",
    description: "List the updates available for an installed version",
    params: &[
        VERSION_LOC,
        Param::header(AUTH_REFRESH_TOKEN),
        Param::query("cluster_id").required(),
        Param::query("region").required(),
        Param::query("resource_group_id"),
        Param::query("namespace"),
    ],
    accept: Some(MediaType::Json),
    request: RequestBody::None,
    response: ResponseBody::JsonArray,
};

// =============================================================================
// Deploy
// =============================================================================

pub const GET_CLUSTER: Endpoint = get_json(
    "GetCluster",
    "/deploy/kubernetes/clusters/{cluster_id}",
    "Get a Kubernetes cluster",
    &[
        Param::path("cluster_id"),
        REFRESH_TOKEN,
        Param::query("region").required(),
    ],
);

pub const GET_NAMESPACES: Endpoint = get_json(
    "GetNamespaces",
    "/deploy/kubernetes/clusters/{cluster_id}/namespaces",
    "List the namespaces of a cluster",
    &[
        Param::path("cluster_id"),
        REFRESH_TOKEN,
        Param::query("region").required(),
        Param::query("limit"),
        Param::query("offset"),
    ],
);

pub const DEPLOY_OPERATORS: Endpoint = Endpoint {
    id: "DeployOperators",
    method: RestMethod::Post,
    path: "/deploy/kubernetes/olm/operator",
    description: "Deploy operators on a cluster",
    params: OPERATOR_BODY_PARAMS,
    accept: Some(MediaType::Json),
    request: RequestBody::Json,
    response: ResponseBody::JsonArray,
};

pub const LIST_OPERATORS: Endpoint = Endpoint {
    id: "ListOperators",
    method: RestMethod::Get,
    path: "/deploy/kubernetes/olm/operator",
    description: "List the operators deployed on a cluster",
    params: OPERATOR_QUERY_PARAMS,
    accept: Some(MediaType::Json),
    request: RequestBody::None,
    response: ResponseBody::JsonArray,
};

pub const REPLACE_OPERATORS: Endpoint = Endpoint {
    id: "ReplaceOperators",
    method: RestMethod::Put,
    path: "/deploy/kubernetes/olm/operator",
    description: "Update the operators on a cluster",
    params: OPERATOR_BODY_PARAMS,
    accept: Some(MediaType::Json),
    request: RequestBody::Json,
    response: ResponseBody::JsonArray,
};

pub const DELETE_OPERATORS: Endpoint = action(
    "DeleteOperators",
    RestMethod::Delete,
    "/deploy/kubernetes/olm/operator",
    "Delete operators from a cluster",
    OPERATOR_QUERY_PARAMS,
);

pub const INSTALL_VERSION: Endpoint = Endpoint {
    id: "InstallVersion",
    method: RestMethod::Post,
    path: "/versions/{version_loc_id}/install",
    description: "Start installing a version",
    params: INSTALL_PARAMS,
    accept: None,
    request: RequestBody::Json,
    response: ResponseBody::Empty,
};

pub const PREINSTALL_VERSION: Endpoint = Endpoint {
    id: "PreinstallVersion",
    method: RestMethod::Post,
    path: "/versions/{version_loc_id}/preinstall",
    description: "Start the pre-install of a version",
    params: INSTALL_PARAMS,
    accept: None,
    request: RequestBody::Json,
    response: ResponseBody::Empty,
};

pub const GET_PREINSTALL: Endpoint = get_json(
    "GetPreinstall",
    "/versions/{version_loc_id}/preinstall",
    "Get the pre-install status of a version",
    &[
        VERSION_LOC,
        REFRESH_TOKEN,
        Param::query("cluster_id"),
        Param::query("region"),
        Param::query("namespace"),
    ],
);

pub const VALIDATE_INSTALL: Endpoint = Endpoint {
    id: "ValidateInstall",
    method: RestMethod::Post,
    path: "/versions/{version_loc_id}/validation/install",
    description: "Start validating a version by installing it",
    params: INSTALL_PARAMS,
    accept: None,
    request: RequestBody::Json,
    response: ResponseBody::Empty,
};

pub const GET_VALIDATION_STATUS: Endpoint = get_json(
    "GetValidationStatus",
    "/versions/{version_loc_id}/validation/install",
    "Get the validation status of a version",
    &[VERSION_LOC, REFRESH_TOKEN],
);

pub const GET_OVERRIDE_VALUES: Endpoint = get_json(
    "GetOverrideValues",
    "/versions/{version_loc_id}/validation/overridevalues",
    "Get the override values used by the last validation",
    VERSION_PARAMS,
);

// =============================================================================
// Objects
// =============================================================================

pub const SEARCH_OBJECTS: Endpoint = get_json(
    "SearchObjects",
    "/objects",
    "Search objects across catalogs",
    &[
        Param::query("query").required(),
        Param::query("limit"),
        Param::query("offset"),
        Param::query("collapse"),
        Param::query("digest"),
    ],
);

pub const LIST_OBJECTS: Endpoint = get_json(
    "ListObjects",
    "/catalogs/{catalog_identifier}/objects",
    "List the objects of a catalog",
    &[
        CATALOG,
        Param::query("limit"),
        Param::query("offset"),
        Param::query("name"),
        Param::query("sort"),
    ],
);

pub const CREATE_OBJECT: Endpoint = send_json(
    "CreateObject",
    RestMethod::Post,
    "/catalogs/{catalog_identifier}/objects",
    "Create a catalog object",
    CATALOG_PARAMS,
);

pub const GET_OBJECT: Endpoint = get_json(
    "GetObject",
    "/catalogs/{catalog_identifier}/objects/{object_identifier}",
    "Get a catalog object",
    OBJECT_PARAMS,
);

pub const REPLACE_OBJECT: Endpoint = send_json(
    "ReplaceObject",
    RestMethod::Put,
    "/catalogs/{catalog_identifier}/objects/{object_identifier}",
    "Replace a catalog object",
    OBJECT_PARAMS,
);

pub const DELETE_OBJECT: Endpoint = action(
    "DeleteObject",
    RestMethod::Delete,
    "/catalogs/{catalog_identifier}/objects/{object_identifier}",
    "Delete a catalog object",
    OBJECT_PARAMS,
);

pub const GET_OBJECT_AUDIT: Endpoint = get_json(
    "GetObjectAudit",
    "/catalogs/{catalog_identifier}/objects/{object_identifier}/audit",
    "Get the audit log of a catalog object",
    OBJECT_PARAMS,
);

pub const ACCOUNT_PUBLISH_OBJECT: Endpoint = action(
    "AccountPublishObject",
    RestMethod::Post,
    "/catalogs/{catalog_identifier}/objects/{object_identifier}/account-publish",
    "Publish an object to the account",
    OBJECT_PARAMS,
);

pub const SHARED_PUBLISH_OBJECT: Endpoint = action(
    "SharedPublishObject",
    RestMethod::Post,
    "/catalogs/{catalog_identifier}/objects/{object_identifier}/shared-publish",
    "Share an object with its access list",
    OBJECT_PARAMS,
);

pub const IBM_PUBLISH_OBJECT: Endpoint = action(
    "IbmPublishObject",
    RestMethod::Post,
    "/catalogs/{catalog_identifier}/objects/{object_identifier}/ibm-publish",
    "Share an object with IBMers",
    OBJECT_PARAMS,
);

pub const PUBLIC_PUBLISH_OBJECT: Endpoint = action(
    "PublicPublishObject",
    RestMethod::Post,
    "/catalogs/{catalog_identifier}/objects/{object_identifier}/public-publish",
    "Share an object with all users",
    OBJECT_PARAMS,
);

const OBJECT_ACCESS_PARAMS: &[Param] = &[CATALOG, OBJECT, Param::path("account_identifier")];

pub const CREATE_OBJECT_ACCESS: Endpoint = action(
    "CreateObjectAccess",
    RestMethod::Post,
    "/catalogs/{catalog_identifier}/objects/{object_identifier}/access/{account_identifier}",
    "Add an account to an object's access list",
    OBJECT_ACCESS_PARAMS,
);

pub const GET_OBJECT_ACCESS: Endpoint = get_json(
    "GetObjectAccess",
    "/catalogs/{catalog_identifier}/objects/{object_identifier}/access/{account_identifier}",
    "Check for an account on an object's access list",
    OBJECT_ACCESS_PARAMS,
);

pub const DELETE_OBJECT_ACCESS: Endpoint = action(
    "DeleteObjectAccess",
    RestMethod::Delete,
    "/catalogs/{catalog_identifier}/objects/{object_identifier}/access/{account_identifier}",
    "Remove an account from an object's access list",
    OBJECT_ACCESS_PARAMS,
);

pub const GET_OBJECT_ACCESS_LIST: Endpoint = get_json(
    "GetObjectAccessList",
    "/catalogs/{catalog_identifier}/objects/{object_identifier}/access",
    "Get an object's access list",
    &[CATALOG, OBJECT, Param::query("limit"), Param::query("offset")],
);

pub const DELETE_OBJECT_ACCESS_LIST: Endpoint = Endpoint {
    id: "DeleteObjectAccessList",
    method: RestMethod::Delete,
    path: "/catalogs/{catalog_identifier}/objects/{object_identifier}/access",
    description: "Remove accounts from an object's access list",
    params: OBJECT_PARAMS,
    accept: Some(MediaType::Json),
    request: RequestBody::JsonArray,
    response: ResponseBody::Json,
};

pub const ADD_OBJECT_ACCESS_LIST: Endpoint = Endpoint {
    id: "AddObjectAccessList",
    method: RestMethod::Post,
    path: "/catalogs/{catalog_identifier}/objects/{object_identifier}/access",
    description: "Add accounts to an object's access list",
    params: OBJECT_PARAMS,
    accept: Some(MediaType::Json),
    request: RequestBody::JsonArray,
    response: ResponseBody::Json,
};

// =============================================================================
// Instances
// =============================================================================

const INSTANCE_PARAMS: &[Param] = &[Param::path("instance_identifier"), REFRESH_TOKEN];

pub const CREATE_OFFERING_INSTANCE: Endpoint = send_json(
    "CreateOfferingInstance",
    RestMethod::Post,
    "/instances/offerings",
    "Create an offering instance",
    &[REFRESH_TOKEN],
);

pub const GET_OFFERING_INSTANCE: Endpoint = get_json(
    "GetOfferingInstance",
    "/instances/offerings/{instance_identifier}",
    "Get an offering instance",
    &[Param::path("instance_identifier")],
);

pub const PUT_OFFERING_INSTANCE: Endpoint = send_json(
    "PutOfferingInstance",
    RestMethod::Put,
    "/instances/offerings/{instance_identifier}",
    "Replace an offering instance",
    INSTANCE_PARAMS,
);

pub const DELETE_OFFERING_INSTANCE: Endpoint = action(
    "DeleteOfferingInstance",
    RestMethod::Delete,
    "/instances/offerings/{instance_identifier}",
    "Delete an offering instance",
    INSTANCE_PARAMS,
);

const VERSION_INSTANCE: Param = Param::path("instance_identifier");

pub const CREATE_VERSION_INSTANCE: Endpoint = send_json(
    "CreateVersionInstance",
    RestMethod::Post,
    "/instances/versions",
    "Create a version instance",
    &[REFRESH_TOKEN],
);

pub const GET_VERSION_INSTANCE: Endpoint = get_json(
    "GetVersionInstance",
    "/instances/versions/{instance_identifier}",
    "Get a version instance",
    &[VERSION_INSTANCE],
);

pub const PUT_VERSION_INSTANCE: Endpoint = send_json(
    "PutVersionInstance",
    RestMethod::Put,
    "/instances/versions/{instance_identifier}",
    "Replace a version instance",
    &[VERSION_INSTANCE, REFRESH_TOKEN],
);

pub const DELETE_VERSION_INSTANCE: Endpoint = action(
    "DeleteVersionInstance",
    RestMethod::Delete,
    "/instances/versions/{instance_identifier}",
    "Delete a version instance",
    &[VERSION_INSTANCE],
);

// =============================================================================
// License entitlements
// =============================================================================

pub const CREATE_LICENSE_ENTITLEMENT: Endpoint = send_json(
    "CreateLicenseEntitlement",
    RestMethod::Post,
    "/license/entitlements",
    "Create a license entitlement",
    &[
        Param::query("account_id"),
        Param::body("name"),
        Param::body("effective_from"),
        Param::body("effective_until"),
        Param::body("version_id"),
        Param::body("license_id"),
        Param::body("license_owner_id"),
        Param::body("license_provider_id"),
        Param::body("license_product_id"),
    ],
);

pub const DELETE_LICENSE_ENTITLEMENT: Endpoint = action(
    "DeleteLicenseEntitlement",
    RestMethod::Delete,
    "/license/entitlements/{entitlement_id}",
    "Delete a license entitlement",
    &[Param::path("entitlement_id"), Param::query("account_id")],
);

// =============================================================================
// Repos
// =============================================================================

pub const GET_REPOS: Endpoint = get_json(
    "GetRepos",
    "/repo/{type}/charts",
    "List the charts of a helm repository",
    &[Param::path("type"), Param::query("repourl").required()],
);

pub const GET_REPO: Endpoint = get_json(
    "GetRepo",
    "/repo/{type}/entries",
    "Get the details of a helm chart",
    &[Param::path("type"), Param::query("charturl").required()],
);

/// Every endpoint of the Catalog Management API.
pub const ALL_ENDPOINTS: &[&Endpoint] = &[
    // Account
    &GET_CATALOG_ACCOUNT,
    &UPDATE_CATALOG_ACCOUNT,
    &GET_CATALOG_ACCOUNT_AUDIT,
    &GET_CATALOG_ACCOUNT_FILTERS,
    // Catalogs
    &LIST_CATALOGS,
    &CREATE_CATALOG,
    &GET_CATALOG,
    &REPLACE_CATALOG,
    &DELETE_CATALOG,
    &GET_CATALOG_AUDIT,
    // Enterprise
    &GET_ENTERPRISE,
    &UPDATE_ENTERPRISE,
    &GET_ENTERPRISE_AUDIT,
    // Offerings
    &GET_CONSUMPTION_OFFERINGS,
    &LIST_OFFERINGS,
    &CREATE_OFFERING,
    &IMPORT_OFFERING_VERSION,
    &IMPORT_OFFERING,
    &RELOAD_OFFERING,
    &GET_OFFERING,
    &REPLACE_OFFERING,
    &UPDATE_OFFERING,
    &DELETE_OFFERING,
    &GET_OFFERING_AUDIT,
    &REPLACE_OFFERING_ICON,
    &UPDATE_OFFERING_IBM,
    &GET_OFFERING_UPDATES,
    &GET_OFFERING_SOURCE,
    &GET_OFFERING_SOURCE_URL,
    &GET_OFFERING_ABOUT,
    &GET_OFFERING_LICENSE,
    &GET_OFFERING_CONTAINER_IMAGES,
    // Versions
    &DEPRECATE_VERSION,
    &ACCOUNT_PUBLISH_VERSION,
    &IBM_PUBLISH_VERSION,
    &PUBLIC_PUBLISH_VERSION,
    &COMMIT_VERSION,
    &COPY_VERSION,
    &GET_OFFERING_WORKING_COPY,
    &GET_VERSION,
    &DELETE_VERSION,
    &GET_VERSION_UPDATES,
    // Deploy
    &GET_CLUSTER,
    &GET_NAMESPACES,
    &DEPLOY_OPERATORS,
    &LIST_OPERATORS,
    &REPLACE_OPERATORS,
    &DELETE_OPERATORS,
    &INSTALL_VERSION,
    &PREINSTALL_VERSION,
    &GET_PREINSTALL,
    &VALIDATE_INSTALL,
    &GET_VALIDATION_STATUS,
    &GET_OVERRIDE_VALUES,
    // Objects
    &SEARCH_OBJECTS,
    &LIST_OBJECTS,
    &CREATE_OBJECT,
    &GET_OBJECT,
    &REPLACE_OBJECT,
    &DELETE_OBJECT,
    &GET_OBJECT_AUDIT,
    &ACCOUNT_PUBLISH_OBJECT,
    &SHARED_PUBLISH_OBJECT,
    &IBM_PUBLISH_OBJECT,
    &PUBLIC_PUBLISH_OBJECT,
    &CREATE_OBJECT_ACCESS,
    &GET_OBJECT_ACCESS,
    &DELETE_OBJECT_ACCESS,
    &GET_OBJECT_ACCESS_LIST,
    &DELETE_OBJECT_ACCESS_LIST,
    &ADD_OBJECT_ACCESS_LIST,
    // Instances
    &CREATE_OFFERING_INSTANCE,
    &GET_OFFERING_INSTANCE,
    &PUT_OFFERING_INSTANCE,
    &DELETE_OFFERING_INSTANCE,
    &CREATE_VERSION_INSTANCE,
    &GET_VERSION_INSTANCE,
    &PUT_VERSION_INSTANCE,
    &DELETE_VERSION_INSTANCE,
    // License entitlements
    &CREATE_LICENSE_ENTITLEMENT,
    &DELETE_LICENSE_ENTITLEMENT,
    // Repos
    &GET_REPOS,
    &GET_REPO,
];

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_define::{ParamLocation, validate_table};

    #[test]
    fn table_is_consistent() {
        validate_table(ALL_ENDPOINTS).unwrap();
    }

    #[test]
    fn table_lists_every_operation() {
        assert_eq!(ALL_ENDPOINTS.len(), 83);
    }

    #[test]
    fn cluster_operations_require_refresh_token() {
        for endpoint in [
            &GET_CLUSTER,
            &GET_NAMESPACES,
            &DEPLOY_OPERATORS,
            &LIST_OPERATORS,
            &REPLACE_OPERATORS,
            &DELETE_OPERATORS,
            &INSTALL_VERSION,
            &PREINSTALL_VERSION,
            &GET_PREINSTALL,
            &VALIDATE_INSTALL,
            &GET_VALIDATION_STATUS,
            &CREATE_VERSION_INSTANCE,
            &PUT_VERSION_INSTANCE,
        ] {
            let param = endpoint
                .param(ParamLocation::Header, "x-auth-refresh-token")
                .unwrap_or_else(|| panic!("{} has no refresh token", endpoint.id));
            assert!(param.required, "{}", endpoint.id);
        }
        assert!(GET_OVERRIDE_VALUES.param(ParamLocation::Header, AUTH_REFRESH_TOKEN).is_none());
    }

    #[test]
    fn patch_endpoint_requires_etag() {
        assert_eq!(UPDATE_OFFERING.content_type(), Some(MediaType::JsonPatch));
        assert!(UPDATE_OFFERING.param(ParamLocation::Header, IF_MATCH).unwrap().required);
    }

    #[test]
    fn non_json_endpoints_negotiate_their_media_type() {
        assert_eq!(GET_OFFERING_ABOUT.accept, Some(MediaType::Markdown));
        assert_eq!(GET_OFFERING_LICENSE.accept, Some(MediaType::PlainText));
        assert_eq!(GET_OFFERING_SOURCE.accept, Some(MediaType::Yaml));
        assert_eq!(GET_OFFERING_SOURCE.response, ResponseBody::Binary);
    }

    #[test]
    fn bodyless_actions_send_no_accept() {
        for endpoint in ALL_ENDPOINTS {
            if endpoint.response == ResponseBody::Empty {
                assert_eq!(endpoint.accept, None, "{}", endpoint.id);
            }
        }
    }
}
