//! Text templates for trust-store creation and client configuration
//!
//! Pure string substitution, no logic. The rendered texts reference
//! placeholder file paths; the consumer fills in real locations.

/// Shell script that imports the extracted root certificate into a JKS trust
/// store with keytool
pub fn truststore_script(alias: &str, password: &str) -> String {
    format!(
        "#!/bin/sh\n\
         # Creates truststore.jks from the extracted root CA certificate.\n\
         # Requires keytool (ships with any JRE/JDK).\n\
         set -e\n\
         \n\
         keytool -import -noprompt \\\n\
         \x20   -file CA_root.pem \\\n\
         \x20   -alias {alias}-ca \\\n\
         \x20   -keystore truststore.jks \\\n\
         \x20   -storepass {password}\n\
         \n\
         echo \"truststore.jks created (alias: {alias}-ca)\"\n",
        alias = alias,
        password = password,
    )
}

/// Kafka client SSL properties referencing the generated stores
pub fn client_properties(password: &str, bootstrap: &str) -> String {
    format!(
        "# Kafka SSL Configuration\n\
         # Generated by kafstore\n\
         \n\
         security.protocol=SSL\n\
         \n\
         ssl.truststore.location=/path/to/truststore.jks\n\
         ssl.truststore.password={password}\n\
         \n\
         ssl.keystore.location=/path/to/keystore.p12\n\
         ssl.keystore.password={password}\n\
         ssl.keystore.type=PKCS12\n\
         ssl.key.password={password}\n\
         \n\
         ssl.endpoint.identification.algorithm=\n\
         \n\
         bootstrap.servers={bootstrap}\n",
        password = password,
        bootstrap = bootstrap,
    )
}
