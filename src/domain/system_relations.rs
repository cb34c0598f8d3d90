//! Relation keys reserved by the platform.

/// Relation keys owned by the platform.
///
/// Properties with these keys are never exposed as user-facing aliases.
const SYSTEM_RELATIONS: &[&str] = &[
    "id", "name", "description", "snippet", "iconEmoji", "iconImage", "type", "layout",
    "layoutAlign", "coverId", "coverScale", "coverType", "coverX", "coverY", "createdDate",
    "creator", "lastModifiedDate", "lastModifiedBy", "lastOpenedDate", "featuredRelations",
    "isFavorite", "workspaceId", "spaceId", "links", "internalFlags", "restrictions", "addedDate",
    "source", "sourceObject", "setOf", "relationFormat", "relationKey", "relationReadonlyValue",
    "relationDefaultValue", "relationMaxCount", "relationOptionColor", "relationFormatObjectTypes",
    "isReadonly", "isDeleted", "isHidden", "spaceShareableStatus", "isAclShared",
    "isHiddenDiscovery", "done", "isArchived", "templateIsBundled", "smartblockTypes",
    "targetObjectType", "recommendedLayout", "fileExt", "fileMimeType", "sizeInBytes",
    "oldAnytypeID", "spaceDashboardId", "recommendedRelations", "iconOption", "widthInPixels",
    "heightInPixels", "sourceFilePath", "fileSyncStatus", "defaultTemplateId", "uniqueKey",
    "backlinks", "profileOwnerIdentity", "fileBackupStatus", "fileId", "fileIndexingStatus",
    "origin", "revision", "imageKind", "importType", "spaceAccessType", "spaceInviteFileCid",
    "spaceInviteFileKey", "readersLimit", "writersLimit", "sharedSpacesLimit",
    "participantPermissions", "participantStatus", "latestAclHeadId", "identity", "globalName",
    "syncDate", "syncStatus", "syncError", "lastUsedDate", "mentions", "chatId", "hasChat",
    "timestamp", "iconName", "recommendedFeaturedRelations", "recommendedHiddenRelations",
    "recommendedFileRelations", "layoutWidth", "defaultViewType", "defaultTypeId",
    "resolvedLayout", "pluralName",
];

/// Returns true if `key` is a system relation.
///
/// Keys are matched both as written (`lastModifiedDate`) and in the
/// snake_case spelling used by newer API versions (`last_modified_date`).
///
/// # Examples
///
/// ```
/// use anytype::domain::is_system_relation;
///
/// assert!(is_system_relation("creator"));
/// assert!(is_system_relation("last_modified_date"));
/// assert!(!is_system_relation("release_year"));
/// ```
pub fn is_system_relation(key: &str) -> bool {
    if SYSTEM_RELATIONS.contains(&key) {
        return true;
    }
    key.contains('_') && SYSTEM_RELATIONS.contains(&snake_to_camel(key).as_str())
}

fn snake_to_camel(key: &str) -> String {
    let mut result = String::with_capacity(key.len());
    let mut upper_next = false;
    for c in key.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            result.extend(c.to_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }
    result
}
