//! # QBAY NFT Marketplace (contract 12)
//!
//! Collections, minting, fixed-price sales, swaps, offers and traditional
//! auctions. Prices settle either in Qubic (attached to the transaction) or
//! in CFB (settled by the contract), see [`PaymentMethod`].

use crate::describe::{Describe, Lines};
use crate::values::{Asset, PaymentMethod, Uri64};
use tc_01_call_engine::{wire_struct, PublicKey};

/// Contract index.
pub const CONTRACT_INDEX: u32 = 12;

/// Number of slots in a [`IncomingAuctions`] reply.
pub const INCOMING_AUCTION_SLOTS: usize = 1024;

// =============================================================================
// FUNCTION INPUTS
// =============================================================================

wire_struct! {
    /// Count NFTs held by `user`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct GetNumberOfNftForUser {
        /// Holder
        pub user: PublicKey,
    }
}

wire_struct! {
    /// The `nft_number`-th NFT held by `user`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct GetInfoOfNftUserPossessed {
        /// Holder
        pub user: PublicKey,
        /// Position in the holder's list
        pub nft_number: u32,
    }
}

wire_struct! {
    /// Marketplace totals. The input word is a placeholder.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct GetInfoOfMarketplace {
        /// Placeholder, always 10
        pub t: u32,
    }
}

impl Default for GetInfoOfMarketplace {
    fn default() -> Self {
        Self { t: 10 }
    }
}

wire_struct! {
    /// The `order_of_collection`-th collection created by `creator`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct GetInfoOfCollectionByCreator {
        /// Collection creator
        pub creator: PublicKey,
        /// Position in the creator's list
        pub order_of_collection: u32,
    }
}

wire_struct! {
    /// Collection by global id.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct GetInfoOfCollectionById {
        /// Collection id
        pub id_of_collection: u32,
    }
}

wire_struct! {
    /// Page of NFT ids with a running auction.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct GetIncomingAuctions {
        /// First slot
        pub offset: u32,
        /// Number of slots wanted
        pub count: u32,
    }
}

wire_struct! {
    /// NFT by global id.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct GetInfoOfNftById {
        /// NFT id
        pub nft_id: u32,
    }
}

// =============================================================================
// FUNCTION OUTPUTS
// =============================================================================

wire_struct! {
    /// Calendar time of an auction boundary, two-digit year.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct AuctionClock {
        /// Year since 2000
        pub year: u8,
        /// Month
        pub month: u8,
        /// Day
        pub day: u8,
        /// Hour
        pub hour: u8,
        /// Minute
        pub minute: u8,
        /// Second
        pub second: u8,
    }
}

impl std::fmt::Display for AuctionClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "20{:02}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

wire_struct! {
    /// State of one NFT.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct NftInfo {
        /// Minter
        pub creator: PublicKey,
        /// Current holder
        pub possessor: PublicKey,
        /// Highest offer maker
        pub ask_user: PublicKey,
        /// Auction owner
        pub creator_of_auction: PublicKey,
        /// Price set by the holder
        pub sale_price: i64,
        /// Highest offer
        pub ask_max_price: i64,
        /// Current auction price
        pub current_price_of_auction: u64,
        /// Percent, 0..=100
        pub royalty: u32,
        /// NFT wanted in exchange
        pub nft_id_for_exchange: u32,
        /// Metadata URI
        pub uri: Uri64,
        /// 0 none, 1 traditional, 2 sold, 3 dutch
        pub status_of_auction: u8,
        /// Auction start
        pub auction_started: AuctionClock,
        /// Auction end
        pub auction_ended: AuctionClock,
        /// Listed for sale
        pub status_of_sale: bool,
        /// Has an open offer
        pub status_of_ask: bool,
        /// Currency of the open offer
        pub payment_method_of_ask: PaymentMethod,
        /// Listed for exchange
        pub status_of_exchange: bool,
        /// Currency of the auction
        pub payment_method_of_auction: PaymentMethod,
    }
}

impl Describe for NftInfo {
    fn describe(&self) -> String {
        Lines::default()
            .key("creator", &self.creator)
            .key("possessor", &self.possessor)
            .key("ask_user", &self.ask_user)
            .key("creator_of_auction", &self.creator_of_auction)
            .field("sale_price", self.sale_price)
            .field("ask_max_price", self.ask_max_price)
            .field("current_price_of_auction", self.current_price_of_auction)
            .field("royalty", self.royalty)
            .field("nft_id_for_exchange", self.nft_id_for_exchange)
            .field("uri", self.uri)
            .field("status_of_auction", self.status_of_auction)
            .field("auction_started", self.auction_started)
            .field("auction_ended", self.auction_ended)
            .field("status_of_sale", self.status_of_sale)
            .field("status_of_ask", self.status_of_ask)
            .field("payment_method_of_ask", self.payment_method_of_ask)
            .field("status_of_exchange", self.status_of_exchange)
            .field("payment_method_of_auction", self.payment_method_of_auction)
            .finish()
    }
}

wire_struct! {
    /// Marketplace-wide prices and totals.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct MarketplaceInfo {
        /// CFB per USD
        pub price_of_cfb: u64,
        /// Qubic per USD
        pub price_of_qubic: u64,
        /// NFTs still to be minted from collections
        pub number_of_nft_incoming: u64,
        /// Fees earned in Qubic
        pub earned_qubic: u64,
        /// Fees earned in CFB
        pub earned_cfb: u64,
        /// Collections created
        pub number_of_collection: u32,
        /// NFTs minted
        pub number_of_nft: u32,
        /// Market open
        pub status_of_market_place: bool,
    }
}

impl Describe for MarketplaceInfo {
    fn describe(&self) -> String {
        Lines::default()
            .field("price_of_cfb", self.price_of_cfb)
            .field("price_of_qubic", self.price_of_qubic)
            .field("number_of_nft_incoming", self.number_of_nft_incoming)
            .field("earned_qubic", self.earned_qubic)
            .field("earned_cfb", self.earned_cfb)
            .field("number_of_collection", self.number_of_collection)
            .field("number_of_nft", self.number_of_nft)
            .field("status_of_market_place", self.status_of_market_place)
            .finish()
    }
}

wire_struct! {
    /// Collection as seen from its creator.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct CollectionByCreator {
        /// Drop mint price
        pub price_for_drop_mint: u64,
        /// Global id
        pub id_of_collection: u32,
        /// Percent, 0..=100
        pub royalty: u32,
        /// Remaining capacity
        pub current_size: i32,
        /// Cap per holder
        pub max_size_holding_per_one_id: u32,
        /// Metadata URI
        pub uri: Uri64,
        /// Drop collection
        pub type_of_collection: bool,
    }
}

impl Describe for CollectionByCreator {
    fn describe(&self) -> String {
        Lines::default()
            .field("price_for_drop_mint", self.price_for_drop_mint)
            .field("id_of_collection", self.id_of_collection)
            .field("royalty", self.royalty)
            .field("current_size", self.current_size)
            .field("max_size_holding_per_one_id", self.max_size_holding_per_one_id)
            .field("uri", self.uri)
            .field("type_of_collection", self.type_of_collection)
            .finish()
    }
}

wire_struct! {
    /// Collection by id.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct CollectionById {
        /// Collection creator
        pub creator: PublicKey,
        /// Drop mint price
        pub price_for_drop_mint: u64,
        /// Percent, 0..=100
        pub royalty: u32,
        /// Remaining capacity
        pub current_size: i32,
        /// Cap per holder
        pub max_size_holding_per_one_id: u32,
        /// Metadata URI
        pub uri: Uri64,
        /// Drop collection
        pub type_of_collection: bool,
    }
}

impl Describe for CollectionById {
    fn describe(&self) -> String {
        Lines::default()
            .key("creator", &self.creator)
            .field("price_for_drop_mint", self.price_for_drop_mint)
            .field("royalty", self.royalty)
            .field("current_size", self.current_size)
            .field("max_size_holding_per_one_id", self.max_size_holding_per_one_id)
            .field("uri", self.uri)
            .field("type_of_collection", self.type_of_collection)
            .finish()
    }
}

wire_struct! {
    /// NFT ids with a running auction; unused slots are zero.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct IncomingAuctions {
        /// Slots
        pub nft_ids: [u32; INCOMING_AUCTION_SLOTS],
    }
}

impl IncomingAuctions {
    /// The first `count` slots, as requested in [`GetIncomingAuctions`].
    pub fn first(&self, count: u32) -> &[u32] {
        let count = (count as usize).min(INCOMING_AUCTION_SLOTS);
        &self.nft_ids[..count]
    }
}

impl Describe for IncomingAuctions {
    fn describe(&self) -> String {
        let used = self
            .nft_ids
            .iter()
            .rposition(|&id| id != 0)
            .map_or(0, |last| last + 1);
        self.nft_ids[..used]
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// =============================================================================
// PROCEDURE INPUTS
// =============================================================================

wire_struct! {
    /// Admin: set USD exchange prices.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct SettingCfbAndQubicPrice {
        /// CFB per USD
        pub cfb_price: u64,
        /// Qubic per USD
        pub qubic_price: u64,
    }
}

wire_struct! {
    /// Open a collection.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct CreateCollection {
        /// Drop mint price
        pub price_for_drop_mint: u64,
        /// Capacity
        pub volume: u32,
        /// Percent, 0..=100
        pub royalty: u32,
        /// Cap per holder
        pub max_size_per_one_id: u32,
        /// Metadata URI
        pub uri: Uri64,
        /// Drop collection
        pub type_of_collection: bool,
    }
}

wire_struct! {
    /// Mint into an own collection or as a single NFT. Attach [`crate::QBAY_MINT_FEE`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Mint {
        /// Percent, 0..=100
        pub royalty: u32,
        /// Target collection
        pub collection_id: u32,
        /// Metadata URI
        pub uri: Uri64,
        /// 0 collection mint, 1 single NFT
        pub type_of_mint: u8,
    }
}

wire_struct! {
    /// Mint from a drop collection. Attach the drop price.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct MintOfDrop {
        /// Drop collection
        pub collection_id: u32,
        /// Metadata URI
        pub uri: Uri64,
    }
}

wire_struct! {
    /// Give an NFT away.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Transfer {
        /// New holder
        pub receiver: PublicKey,
        /// NFT id
        pub nft_id: u32,
    }
}

wire_struct! {
    /// List an NFT at a fixed price.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ListInMarket {
        /// Asking price
        pub price: u64,
        /// NFT id
        pub nft_id: u32,
    }
}

wire_struct! {
    /// Buy a listed NFT.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Sell {
        /// NFT id
        pub nft_id: u32,
        /// Settlement currency
        pub method_of_payment: PaymentMethod,
    }
}

wire_struct! {
    /// Withdraw a listing.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct CancelSale {
        /// NFT id
        pub nft_id: u32,
    }
}

wire_struct! {
    /// Offer a swap of two NFTs.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ListInExchange {
        /// Own NFT
        pub possessed_nft: u32,
        /// Wanted NFT
        pub another_nft: u32,
    }
}

wire_struct! {
    /// Withdraw a swap offer.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct CancelExchange {
        /// Own NFT
        pub possessed_nft: u32,
    }
}

wire_struct! {
    /// Offer a price for someone else's NFT.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct MakeOffer {
        /// Offered price
        pub ask_price: i64,
        /// NFT id
        pub nft_id: u32,
        /// Settlement currency
        pub payment_method: PaymentMethod,
    }
}

wire_struct! {
    /// Accept the open offer on an own NFT.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct AcceptOffer {
        /// NFT id
        pub nft_id: u32,
    }
}

wire_struct! {
    /// Withdraw an own offer.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct CancelOffer {
        /// NFT id
        pub nft_id: u32,
    }
}

wire_struct! {
    /// Start a traditional auction; boundaries are whole hours.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct CreateTraditionalAuction {
        /// Reserve price
        pub min_price: u64,
        /// NFT id
        pub nft_id: u32,
        /// Start year
        pub start_year: u32,
        /// Start month
        pub start_month: u32,
        /// Start day
        pub start_day: u32,
        /// Start hour
        pub start_hour: u32,
        /// End year
        pub end_year: u32,
        /// End month
        pub end_month: u32,
        /// End day
        pub end_day: u32,
        /// End hour
        pub end_hour: u32,
        /// Settlement currency
        pub payment_method_of_auction: PaymentMethod,
    }
}

wire_struct! {
    /// Bid on a traditional auction.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct BidOnTraditionalAuction {
        /// Bid
        pub price: u64,
        /// NFT id
        pub nft_id: u32,
        /// Settlement currency
        pub payment_method: PaymentMethod,
    }
}

impl BidOnTraditionalAuction {
    /// Amount to attach: the bid when paying in Qubic, else nothing.
    pub fn invocation_amount(&self) -> u64 {
        self.payment_method.invocation_amount(self.price)
    }
}

wire_struct! {
    /// Move management of shares to another contract. Attach [`crate::QBAY_TRANSFER_RIGHTS_FEE`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct TransferShareManagementRights {
        /// Asset whose shares move
        pub asset: Asset,
        /// Shares to move
        pub number_of_shares: i64,
        /// Receiving contract
        pub new_managing_contract_index: u32,
    }
}

wire_struct! {
    /// Admin: open or close the market.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ChangeStatusOfMarket {
        /// Open
        pub status: bool,
    }
}

contract_calls! {
    index: CONTRACT_INDEX;
    functions {
        1 "qbay.get_number_of_nft_for_user": GetNumberOfNftForUser => u32;
        2 "qbay.get_info_of_nft_user_possessed": GetInfoOfNftUserPossessed => NftInfo;
        3 "qbay.get_info_of_marketplace": GetInfoOfMarketplace => MarketplaceInfo;
        4 "qbay.get_info_of_collection_by_creator": GetInfoOfCollectionByCreator => CollectionByCreator;
        5 "qbay.get_info_of_collection_by_id": GetInfoOfCollectionById => CollectionById;
        6 "qbay.get_incoming_auctions": GetIncomingAuctions => IncomingAuctions;
        7 "qbay.get_info_of_nft_by_id": GetInfoOfNftById => NftInfo;
    }
    procedures {
        1 "qbay.setting_cfb_and_qubic_price": SettingCfbAndQubicPrice;
        2 "qbay.create_collection": CreateCollection;
        3 "qbay.mint": Mint;
        4 "qbay.mint_of_drop": MintOfDrop;
        5 "qbay.transfer": Transfer;
        6 "qbay.list_in_market": ListInMarket;
        7 "qbay.sell": Sell;
        8 "qbay.cancel_sale": CancelSale;
        9 "qbay.list_in_exchange": ListInExchange;
        10 "qbay.cancel_exchange": CancelExchange;
        11 "qbay.make_offer": MakeOffer;
        12 "qbay.accept_offer": AcceptOffer;
        13 "qbay.cancel_offer": CancelOffer;
        14 "qbay.create_traditional_auction": CreateTraditionalAuction;
        15 "qbay.bid_on_traditional_auction": BidOnTraditionalAuction;
        16 "qbay.transfer_share_management_rights": TransferShareManagementRights;
        17 "qbay.change_status_of_market": ChangeStatusOfMarket;
    }
}
