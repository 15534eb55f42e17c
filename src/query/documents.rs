//! GraphQL documents, one per entity kind
//!
//! Every document aliases its root field to `result` so the transport can
//! decode responses uniformly, and takes the same variable set:
//! `$where`, `$orderBy`, `$orderDirection`, `$first`, `$skip`.

pub const TOKENS: &str = r"
query tokens($where: Token_filter, $orderBy: Token_orderBy, $orderDirection: OrderDirection, $first: Int, $skip: Int) {
    result: tokens(where: $where, orderBy: $orderBy, orderDirection: $orderDirection, first: $first, skip: $skip) {
        id
        createdAtTimestamp
        createdAtBlockNumber
        name
        symbol
        isListed
        underlyingAddress
    }
}";

pub const INDEXES: &str = r"
query indexes($where: Index_filter, $orderBy: Index_orderBy, $orderDirection: OrderDirection, $first: Int, $skip: Int) {
    result: indexes(where: $where, orderBy: $orderBy, orderDirection: $orderDirection, first: $first, skip: $skip) {
        id
        createdAtTimestamp
        createdAtBlockNumber
        updatedAtTimestamp
        updatedAtBlockNumber
        indexId
        indexValue
        totalUnitsApproved
        totalUnitsPending
        publisher {
            id
        }
        token {
            id
            createdAtTimestamp
            createdAtBlockNumber
            name
            symbol
            isListed
            underlyingAddress
        }
    }
}";

pub const INDEX_SUBSCRIPTIONS: &str = r"
query indexSubscriptions($where: IndexSubscription_filter, $orderBy: IndexSubscription_orderBy, $orderDirection: OrderDirection, $first: Int, $skip: Int) {
    result: indexSubscriptions(where: $where, orderBy: $orderBy, orderDirection: $orderDirection, first: $first, skip: $skip) {
        id
        createdAtTimestamp
        createdAtBlockNumber
        updatedAtTimestamp
        updatedAtBlockNumber
        approved
        units
        subscriber {
            id
        }
        index {
            id
            indexId
            token {
                id
                createdAtTimestamp
                createdAtBlockNumber
                name
                symbol
                isListed
                underlyingAddress
            }
        }
    }
}";

pub const STREAMS: &str = r"
query streams($where: Stream_filter, $orderBy: Stream_orderBy, $orderDirection: OrderDirection, $first: Int, $skip: Int) {
    result: streams(where: $where, orderBy: $orderBy, orderDirection: $orderDirection, first: $first, skip: $skip) {
        id
        createdAtTimestamp
        createdAtBlockNumber
        updatedAtTimestamp
        updatedAtBlockNumber
        currentFlowRate
        streamedUntilUpdatedAt
        sender {
            id
        }
        receiver {
            id
        }
        token {
            id
            createdAtTimestamp
            createdAtBlockNumber
            name
            symbol
            isListed
            underlyingAddress
        }
        flowUpdatedEvents {
            id
            blockNumber
            timestamp
            flowRate
        }
    }
}";

pub const ACCOUNT_TOKEN_SNAPSHOTS: &str = r"
query accountTokenSnapshots($where: AccountTokenSnapshot_filter, $orderBy: AccountTokenSnapshot_orderBy, $orderDirection: OrderDirection, $first: Int, $skip: Int) {
    result: accountTokenSnapshots(where: $where, orderBy: $orderBy, orderDirection: $orderDirection, first: $first, skip: $skip) {
        id
        updatedAtTimestamp
        updatedAtBlockNumber
        totalNumberOfActiveStreams
        totalNumberOfClosedStreams
        totalNetFlowRate
        balanceUntilUpdatedAt
        account {
            id
        }
        token {
            id
            createdAtTimestamp
            createdAtBlockNumber
            name
            symbol
            isListed
            underlyingAddress
        }
    }
}";

pub const EVENTS: &str = r"
query events($where: Event_filter, $orderBy: Event_orderBy, $orderDirection: OrderDirection, $first: Int, $skip: Int) {
    result: events(where: $where, orderBy: $orderBy, orderDirection: $orderDirection, first: $first, skip: $skip) {
        id
        name
        blockNumber
        timestamp
        transactionHash
        addresses
    }
}";
