mod district_resolver;
mod identity_gateway;

pub use district_resolver::DistrictResolver;
pub use identity_gateway::IdentityGateway;

#[cfg(test)]
mod district_resolver_stub;
#[cfg(test)]
mod identity_gateway_stub;

#[cfg(test)]
pub use district_resolver_stub::DistrictResolverStub;
#[cfg(test)]
pub use identity_gateway_stub::IdentityGatewayStub;
