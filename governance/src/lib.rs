#![no_std]

multiversx_sc::imports!();

pub mod governance_proxy;
pub mod token_proxy;
pub mod types;

use types::Proposal;

// ============================================================
// Failure reasons
// ============================================================

pub const ERR_NOT_OWNER: &str = "Sender address must be owner";
pub const ERR_NOT_WHITELISTED: &str = "Address is not whitelisted";
pub const ERR_INSUFFICIENT_FUNDS: &str = "Not enough funds to vote";
pub const ERR_ALREADY_VOTED: &str = "The voter already voted";

// ============================================================
// Contract
// ============================================================

/// One proposal, one administrator, one vote per whitelisted address.
///
/// Voting power is not weighted: the token ledger balance only gates
/// eligibility against the vote threshold, read at the moment of voting.
#[multiversx_sc::contract]
pub trait GovernanceLedger {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// The deployer becomes the administrator.
    #[init]
    fn init(
        &self,
        name: ManagedBuffer,
        description: ManagedBuffer,
        start_timestamp: u64,
        end_timestamp: u64,
        vote_threshold: BigUint,
        token_address: ManagedAddress,
        whitelist: MultiValueEncoded<ManagedAddress>,
    ) {
        let administrator = self.blockchain().get_caller();

        let proposal = Proposal {
            name,
            description,
            start_timestamp,
            end_timestamp,
            administrator,
        };
        self.proposal().set(&proposal);
        self.vote_threshold().set(&vote_threshold);
        self.token_address().set(&token_address);

        for address in whitelist {
            self.whitelist().insert(address);
        }
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINTS: administrator only
    // ========================================================

    /// Unconditional overwrite; may leave start after end.
    #[endpoint(changeStartTimestamp)]
    fn change_start_timestamp(&self, timestamp: u64) {
        self.require_administrator();

        self.proposal().update(|proposal| proposal.start_timestamp = timestamp);
        self.start_timestamp_changed_event(timestamp);
    }

    /// Unconditional overwrite; may leave end before start.
    #[endpoint(changeEndTimestamp)]
    fn change_end_timestamp(&self, timestamp: u64) {
        self.require_administrator();

        self.proposal().update(|proposal| proposal.end_timestamp = timestamp);
        self.end_timestamp_changed_event(timestamp);
    }

    /// Replaces the whole whitelist. Votes already cast stay recorded.
    #[endpoint(setWhitelist)]
    fn set_whitelist(&self, addresses: MultiValueEncoded<ManagedAddress>) {
        self.require_administrator();

        let mut whitelist = self.whitelist();
        whitelist.clear();
        for address in addresses {
            whitelist.insert(address);
        }

        self.whitelist_set_event(whitelist.len() as u64);
    }

    // ========================================================
    // ENDPOINT: vote
    // NotEligible -> Eligible -> Voted, with Voted terminal.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, option: u8) {
        let caller = self.blockchain().get_caller();

        // Checked first: a voter who later leaves the whitelist or
        // spends their tokens is still rejected as a repeat voter.
        require!(!self.voters().contains(&caller), ERR_ALREADY_VOTED);
        require!(self.whitelist().contains(&caller), ERR_NOT_WHITELISTED);

        let balance = self.token_balance_of(&caller);
        require!(balance >= self.vote_threshold().get(), ERR_INSUFFICIENT_FUNDS);

        self.voters().insert(caller.clone());
        self.vote_of(&caller).set(option);
        self.vote_count(option).update(|count| *count += 1);

        self.vote_event(&caller, option, &balance);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_administrator(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.proposal().get().administrator,
            ERR_NOT_OWNER
        );
    }

    fn token_balance_of(&self, address: &ManagedAddress) -> BigUint {
        let token_address = self.token_address().get();
        self.tx()
            .to(&token_address)
            .typed(token_proxy::TokenProxy)
            .balance_of(address.clone())
            .returns(ReturnsResult)
            .sync_call()
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getGovernanceName)]
    fn get_governance_name(&self) -> ManagedBuffer {
        self.proposal().get().name
    }

    #[view(getProposal)]
    fn get_proposal(&self) -> ManagedBuffer {
        self.proposal().get().description
    }

    #[view(getProposalInfo)]
    fn get_proposal_info(&self) -> Proposal<Self::Api> {
        self.proposal().get()
    }

    #[view(getStartTimestamp)]
    fn get_start_timestamp(&self) -> u64 {
        self.proposal().get().start_timestamp
    }

    #[view(getEndTimestamp)]
    fn get_end_timestamp(&self) -> u64 {
        self.proposal().get().end_timestamp
    }

    #[view(getAdministrator)]
    fn get_administrator(&self) -> ManagedAddress {
        self.proposal().get().administrator
    }

    /// Window check against the current block timestamp. Informational
    /// only: `vote` does not consult it.
    #[view(isVotingOpen)]
    fn is_voting_open(&self) -> bool {
        let now = self.blockchain().get_block_timestamp();
        self.proposal().get().is_open_at(now)
    }

    #[view(getVoteThreshold)]
    fn get_vote_threshold(&self) -> BigUint {
        self.vote_threshold().get()
    }

    #[view(getTokenAddress)]
    fn get_token_address(&self) -> ManagedAddress {
        self.token_address().get()
    }

    #[view(checkAddressWhitelist)]
    fn check_address_whitelist(&self, address: ManagedAddress) -> bool {
        self.whitelist().contains(&address)
    }

    #[view(getWhitelist)]
    fn get_whitelist(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for address in self.whitelist().iter() {
            result.push(address);
        }
        result
    }

    /// Empty for an address that never voted.
    #[view(getVoteOf)]
    fn get_vote_of(&self, address: ManagedAddress) -> OptionalValue<u8> {
        if !self.voters().contains(&address) {
            return OptionalValue::None;
        }
        OptionalValue::Some(self.vote_of(&address).get())
    }

    #[view(getVoteCount)]
    fn get_vote_count(&self, option: u8) -> u64 {
        self.vote_count(option).get()
    }

    #[view(getVoterCount)]
    fn get_voter_count(&self) -> u64 {
        self.voters().len() as u64
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] voter: &ManagedAddress,
        #[indexed] option: u8,
        balance: &BigUint,
    );

    #[event("whitelistSet")]
    fn whitelist_set_event(&self, #[indexed] size: u64);

    #[event("startTimestampChanged")]
    fn start_timestamp_changed_event(&self, #[indexed] timestamp: u64);

    #[event("endTimestampChanged")]
    fn end_timestamp_changed_event(&self, #[indexed] timestamp: u64);

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[storage_mapper("proposal")]
    fn proposal(&self) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("voteThreshold")]
    fn vote_threshold(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("tokenAddress")]
    fn token_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("whitelist")]
    fn whitelist(&self) -> UnorderedSetMapper<ManagedAddress>;

    // ── Votes ──

    /// Membership here is the "has voted" flag; option 0 encodes as
    /// empty storage, so `vote_of` alone cannot tell.
    #[storage_mapper("voters")]
    fn voters(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("voteOf")]
    fn vote_of(&self, voter: &ManagedAddress) -> SingleValueMapper<u8>;

    #[storage_mapper("voteCount")]
    fn vote_count(&self, option: u8) -> SingleValueMapper<u64>;
}
